// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod room;
mod seat;
mod statistics;
mod ticket;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::DomainError;
pub use room::RoomDimensions;
pub use seat::{BACK_ROW_PRICE, FRONT_ROW_PRICE, FRONT_ROWS, Seat};
pub use statistics::Statistics;
pub use ticket::{Ticket, TicketToken};
