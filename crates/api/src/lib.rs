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
    clippy::all
)]

mod auth;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{StatsAuthError, StatsAuthenticator};
pub use error::{
    ApiError, AuthError, SEAT_OUT_OF_BOUNDS_MESSAGE, SEAT_PURCHASED_MESSAGE,
    WRONG_PASSWORD_MESSAGE, WRONG_TOKEN_MESSAGE, translate_core_error, translate_domain_error,
};
pub use handlers::{get_statistics, list_seats, purchase_ticket, return_ticket};
pub use request_response::{
    ListSeatsResponse, PurchaseTicketRequest, PurchaseTicketResponse, ReturnTicketRequest,
    ReturnTicketResponse, SeatInfo, StatisticsQuery, StatisticsResponse,
};
