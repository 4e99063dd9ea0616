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

pub const GOLDEN_RATIO: f64 = 1.6180339887498948482045868343656381177203091798057628;

pub const PLANCKS_CONSTANT: f64 = 6.62606957e-34;

pub const BOLTZMANNS_CONSTANT: f64 = 1.3806488e-23;

pub const SPEED_OF_LIGHT: f64 = 299792458.0;

pub const WIENS_CONSTANT: f64 = 2.897772126e-3;
