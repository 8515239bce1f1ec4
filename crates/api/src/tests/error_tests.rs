// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cinema::CoreError;
use cinema_domain::DomainError;

use crate::{
    ApiError, AuthError, SEAT_OUT_OF_BOUNDS_MESSAGE, WRONG_TOKEN_MESSAGE, translate_core_error,
    translate_domain_error,
};

#[test]
fn test_seat_not_found_is_invalid_seat() {
    let err: ApiError = translate_domain_error(DomainError::SeatNotFound { row: 0, column: 0 });
    assert_eq!(
        format!("{err}"),
        format!("Invalid input for field 'seat': {SEAT_OUT_OF_BOUNDS_MESSAGE}")
    );
}

#[test]
fn test_ticket_not_found_is_invalid_token() {
    let err: ApiError = translate_domain_error(DomainError::TicketNotFound);
    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("token"),
            message: String::from(WRONG_TOKEN_MESSAGE),
        }
    );
}

#[test]
fn test_invalid_room_dimensions_is_invalid_room() {
    let err: ApiError = translate_domain_error(DomainError::InvalidRoomDimensions {
        rows: 0,
        columns: 4,
    });
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "room"));
}

#[test]
fn test_core_internal_error_is_internal() {
    let err: ApiError = translate_core_error(CoreError::Internal(String::from("boom")));
    assert_eq!(
        err,
        ApiError::Internal {
            message: String::from("Internal error: boom"),
        }
    );
}

#[test]
fn test_auth_error_converts() {
    let err: ApiError = AuthError::AuthenticationFailed {
        reason: String::from("nope"),
    }
    .into();
    assert_eq!(err.client_message(), "nope");
    assert_eq!(format!("{err}"), "Authentication failed: nope");
}
