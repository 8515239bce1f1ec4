// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use cinema_domain::{Seat, Statistics, Ticket};
use serde::{Deserialize, Serialize};

/// A seat as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatInfo {
    /// The row number.
    pub row: i32,
    /// The column number.
    pub column: i32,
    /// The ticket price for this seat.
    pub price: u32,
}

impl From<Seat> for SeatInfo {
    fn from(seat: Seat) -> Self {
        Self {
            row: seat.row(),
            column: seat.column(),
            price: seat.price(),
        }
    }
}

/// API response describing the room and its free seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSeatsResponse {
    /// Number of rows in the room.
    pub total_rows: u32,
    /// Number of seats per row.
    pub total_columns: u32,
    /// Seats still on sale, row-major.
    pub available_seats: Vec<SeatInfo>,
}

/// API request to buy a seat.
///
/// Any `price` sent by the client is ignored. A missing coordinate reads as
/// 0, which lies outside every room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PurchaseTicketRequest {
    /// The requested row.
    #[serde(default)]
    pub row: i32,
    /// The requested column.
    #[serde(default)]
    pub column: i32,
}

/// API response for a successful purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseTicketResponse {
    /// Token needed to return the ticket.
    pub token: String,
    /// The purchased seat.
    pub ticket: SeatInfo,
}

impl From<&Ticket> for PurchaseTicketResponse {
    fn from(ticket: &Ticket) -> Self {
        Self {
            token: ticket.token().value().to_string(),
            ticket: SeatInfo::from(ticket.seat()),
        }
    }
}

/// API request to return a ticket.
///
/// A missing token is treated like an unknown one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReturnTicketRequest {
    /// The token received at purchase.
    #[serde(default)]
    pub token: String,
}

/// API response for a successful return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnTicketResponse {
    /// The seat that went back on sale.
    pub returned_ticket: SeatInfo,
}

/// Query parameters for the statistics endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct StatisticsQuery {
    /// The statistics password, if supplied.
    pub password: Option<String>,
}

/// API response carrying sales statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsResponse {
    /// Income from every ticket currently sold.
    pub current_income: u64,
    /// Seats still on sale.
    pub number_of_available_seats: usize,
    /// Tickets currently sold.
    pub number_of_purchased_tickets: usize,
}

impl From<Statistics> for StatisticsResponse {
    fn from(stats: Statistics) -> Self {
        Self {
            current_income: stats.current_income,
            number_of_available_seats: stats.available_count,
            number_of_purchased_tickets: stats.sold_count,
        }
    }
}
