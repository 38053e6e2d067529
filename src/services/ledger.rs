use chrono::NaiveDate;
use rusqlite::Connection;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Booking, BookingRequest};
use crate::services::selection::Selection;
use crate::store::{StoreAdapter, BOOKINGS_KEY};

/// Parses the hours field from the booking form. Rejects anything that is not
/// a finite positive number instead of coercing it to zero.
pub fn parse_hours(raw: &str) -> Result<f64, AppError> {
    let hours: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("hours is not a number: {raw:?}")))?;
    validate_hours(hours)?;
    Ok(hours)
}

fn validate_hours(hours: f64) -> Result<(), AppError> {
    if !hours.is_finite() || hours <= 0.0 {
        return Err(AppError::InvalidInput(format!(
            "hours must be a positive number, got {hours}"
        )));
    }
    Ok(())
}

fn validate_date(date: &str) -> Result<(), AppError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidInput(format!("invalid date: {date:?}")))?;
    Ok(())
}

/// Confirms a booking for the currently selected worker: snapshots the
/// worker's details, computes the total once, appends to the ledger and
/// persists it. Fails without writing when nothing is selected or the
/// request is invalid.
pub fn confirm(
    conn: &Connection,
    selection: &Selection,
    request: &BookingRequest,
) -> Result<Booking, AppError> {
    let worker = selection.selected().ok_or(AppError::NoWorkerSelected)?;
    validate_hours(request.hours)?;
    validate_date(&request.date)?;

    let customer = request.customer.trimmed();
    let booking = Booking {
        id: format!("b_{}", Uuid::new_v4()),
        worker_id: worker.id.clone(),
        worker_name: worker.name.clone(),
        skill: worker.skill.clone(),
        rate: worker.rate,
        hours: request.hours,
        date: request.date.clone(),
        total: request.hours * worker.rate,
        customer_name: customer.name,
        phone: customer.phone,
        address: customer.address,
    };

    let store = StoreAdapter::new(conn);
    let mut bookings: Vec<Booking> = store.load_or_else(BOOKINGS_KEY, Vec::new)?;
    bookings.push(booking.clone());
    store.save(BOOKINGS_KEY, &bookings)?;

    tracing::info!(
        "booking {} confirmed: {} ({}) for {} h, total {}",
        booking.id,
        booking.worker_name,
        booking.skill,
        booking.hours,
        booking.total
    );
    Ok(booking)
}

/// Bookings newest-first for display. Storage keeps insertion order.
pub fn list(conn: &Connection) -> Result<Vec<Booking>, AppError> {
    let store = StoreAdapter::new(conn);
    let bookings: Vec<Booking> = store.load_or_else(BOOKINGS_KEY, Vec::new)?;
    Ok(bookings.into_iter().rev().collect())
}

/// Deletes the booking with the given id and persists the remaining list.
/// Returns whether a booking was removed; an unknown id is a silent no-op.
pub fn delete(conn: &Connection, id: &str) -> Result<bool, AppError> {
    let store = StoreAdapter::new(conn);
    let mut bookings: Vec<Booking> = store.load_or_else(BOOKINGS_KEY, Vec::new)?;

    let before = bookings.len();
    bookings.retain(|b| b.id != id);
    if bookings.len() == before {
        return Ok(false);
    }

    store.save(BOOKINGS_KEY, &bookings)?;
    tracing::info!("booking {id} deleted");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::models::{default_workers, CustomerDetails};

    fn request(hours: f64, date: &str) -> BookingRequest {
        BookingRequest {
            hours,
            date: date.to_string(),
            customer: CustomerDetails {
                name: " Alice ".to_string(),
                phone: "555-0100".to_string(),
                address: "12 Main St".to_string(),
            },
        }
    }

    fn ramesh_selection() -> Selection {
        let mut selection = Selection::new();
        selection.select(default_workers().remove(0));
        selection
    }

    #[test]
    fn test_parse_hours_accepts_positive() {
        assert_eq!(parse_hours("3").unwrap(), 3.0);
        assert_eq!(parse_hours(" 2.5 ").unwrap(), 2.5);
    }

    #[test]
    fn test_parse_hours_rejects_garbage() {
        assert!(matches!(
            parse_hours("abc"),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(parse_hours(""), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_hours_rejects_zero_and_negative() {
        assert!(parse_hours("0").is_err());
        assert!(parse_hours("-3").is_err());
    }

    #[test]
    fn test_confirm_without_selection_fails_and_writes_nothing() {
        let conn = db::init_db(":memory:").unwrap();
        let selection = Selection::new();

        let result = confirm(&conn, &selection, &request(3.0, "2026-08-28"));
        assert!(matches!(result, Err(AppError::NoWorkerSelected)));
        assert!(list(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_confirm_snapshots_worker_and_computes_total() {
        let conn = db::init_db(":memory:").unwrap();
        let selection = ramesh_selection();

        let booking = confirm(&conn, &selection, &request(3.0, "2026-08-28")).unwrap();
        assert_eq!(booking.worker_id, "w1");
        assert_eq!(booking.worker_name, "Ramesh");
        assert_eq!(booking.rate, 25.0);
        assert_eq!(booking.total, 75.0);
        assert_eq!(booking.customer_name, "Alice");
        assert!(booking.id.starts_with("b_"));
    }

    #[test]
    fn test_confirm_rejects_invalid_hours() {
        let conn = db::init_db(":memory:").unwrap();
        let selection = ramesh_selection();

        assert!(confirm(&conn, &selection, &request(0.0, "2026-08-28")).is_err());
        assert!(confirm(&conn, &selection, &request(-1.0, "2026-08-28")).is_err());
        assert!(list(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_confirm_rejects_malformed_date() {
        let conn = db::init_db(":memory:").unwrap();
        let selection = ramesh_selection();

        assert!(confirm(&conn, &selection, &request(2.0, "next tuesday")).is_err());
        assert!(list(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_list_is_newest_first() {
        let conn = db::init_db(":memory:").unwrap();
        let selection = ramesh_selection();

        let first = confirm(&conn, &selection, &request(1.0, "2026-08-28")).unwrap();
        let second = confirm(&conn, &selection, &request(2.0, "2026-08-29")).unwrap();

        let bookings = list(&conn).unwrap();
        assert_eq!(bookings.len(), 2);
        assert_eq!(bookings[0].id, second.id);
        assert_eq!(bookings[1].id, first.id);
    }

    #[test]
    fn test_delete_removes_and_persists() {
        let conn = db::init_db(":memory:").unwrap();
        let selection = ramesh_selection();
        let booking = confirm(&conn, &selection, &request(3.0, "2026-08-28")).unwrap();

        assert!(delete(&conn, &booking.id).unwrap());
        assert!(list(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_delete_unknown_id_is_silent_noop() {
        let conn = db::init_db(":memory:").unwrap();
        let selection = ramesh_selection();
        confirm(&conn, &selection, &request(3.0, "2026-08-28")).unwrap();

        assert!(!delete(&conn, "b_missing").unwrap());
        assert_eq!(list(&conn).unwrap().len(), 1);
    }

    #[test]
    fn test_booking_ids_are_unique() {
        let conn = db::init_db(":memory:").unwrap();
        let selection = ramesh_selection();

        let a = confirm(&conn, &selection, &request(1.0, "2026-08-28")).unwrap();
        let b = confirm(&conn, &selection, &request(1.0, "2026-08-28")).unwrap();
        assert_ne!(a.id, b.id);
    }
}
