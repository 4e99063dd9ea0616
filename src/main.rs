// robigo-luculenta -- Spectral path tracer with a pipeline task scheduler
// Copyright (C) 2026 robigo-luculenta contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use image::{ImageBuffer, Rgb};

use robigo_luculenta::scene::demo_scene;
use robigo_luculenta::worker::WorkerPool;
use robigo_luculenta::{RenderConfig, Scheduler};

/// A spectral path tracer, rendered by a pool of workers trading tasks
/// through a shared scheduler.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Number of worker threads. Defaults to the number of logical cores.
    #[arg(long)]
    workers: Option<usize>,

    /// Canvas width, in pixels.
    #[arg(long, default_value_t = 1280)]
    width: usize,

    /// Canvas height, in pixels.
    #[arg(long, default_value_t = 720)]
    height: usize,

    /// How long to render before stopping, in seconds. Omit to run until
    /// Ctrl-C.
    #[arg(long)]
    duration_secs: Option<u64>,

    /// Directory to write refreshed PNG frames to.
    #[arg(long, default_value = "render-output")]
    out_dir: PathBuf,
}

struct PngSink {
    out_dir: PathBuf,
}

impl robigo_luculenta::DisplaySink for PngSink {
    fn on_frame(&self, width: usize, height: usize, rgb: &[u8]) {
        let Some(buffer) = ImageBuffer::<Rgb<u8>, _>::from_raw(width as u32, height as u32, rgb.to_vec()) else {
            log::warn!("dropped a frame of the wrong size ({width}x{height})");
            return;
        };

        if let Err(err) = std::fs::create_dir_all(&self.out_dir) {
            log::error!("could not create {}: {err}", self.out_dir.display());
            return;
        }

        let path = self.out_dir.join("frame.png");
        if let Err(err) = buffer.save(&path) {
            log::error!("could not write {}: {err}", path.display());
        } else {
            log::info!("wrote {}", path.display());
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = RenderConfig::new(
        cli.workers.unwrap_or_else(num_cpus::get),
        cli.width,
        cli.height,
    );

    let sink = Arc::new(PngSink {
        out_dir: cli.out_dir,
    });
    let scheduler = match Scheduler::new(&config, sink) {
        Ok(scheduler) => scheduler,
        Err(err) => {
            log::error!("failed to start scheduler: {err}");
            std::process::exit(1);
        }
    };

    let scene = Arc::new(demo_scene());
    let pool = WorkerPool::spawn(config.workers, scheduler, scene);

    match cli.duration_secs {
        Some(secs) => {
            log::info!(
                "rendering at {}x{} with {} workers for {}s",
                config.width,
                config.height,
                config.workers,
                secs
            );
            let deadline = Instant::now() + Duration::from_secs(secs);
            while Instant::now() < deadline {
                std::thread::sleep(Duration::from_millis(200));
            }
        }
        None => {
            log::info!(
                "rendering at {}x{} with {} workers until interrupted (Ctrl-C)",
                config.width,
                config.height,
                config.workers
            );
            let interrupted = Arc::new(AtomicBool::new(false));
            let handler_flag = interrupted.clone();
            if let Err(err) = ctrlc::set_handler(move || {
                handler_flag.store(true, Ordering::SeqCst);
            }) {
                log::error!("failed to install Ctrl-C handler: {err}");
            }
            while !interrupted.load(Ordering::SeqCst) {
                std::thread::sleep(Duration::from_millis(200));
            }
        }
    }

    pool.join();
}
