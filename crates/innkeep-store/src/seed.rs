//! # Seed Data
//!
//! Initial contents for a [`PropertyStore`](crate::PropertyStore).
//!
//! A seed is either loaded from a JSON file or generated by
//! [`Seed::demo`], which lays out a small three-floor hotel around a
//! business date:
//!
//! ```text
//!  Floor 3 │ 301 Deluxe  available   │ 302 Deluxe  dirty
//!  ────────┼──────────────────────────────────────────────────────────────
//!  Floor 2 │ 201 Deluxe  maintenance │ 202 Deluxe  occupied  (RES004)
//!          │ 203 Std     available   │ 204 Std     arriving  (RES005)
//!          │ 205 Suite   occupied  (RES006)
//!  ────────┼──────────────────────────────────────────────────────────────
//!  Floor 1 │ 101 Deluxe  occupied  (RES001) │ 102 Deluxe departing (RES002)
//!          │ 103 Std     dirty              │ 104 Std    available
//!          │ 105 Suite   arriving  (RES003)
//! ```
//!
//! RES006 carries two posted charges (dinner and laundry). Four guest
//! profiles and four reviews round out the guest-management views.
//!
//! Rates and inventory cover 31 days from the business date. Inventory
//! counts vary by day but are deterministic, so two demo seeds for the same
//! date are identical apart from the log/channel timestamps.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use innkeep_core::{
    BookingSource, ChargeRecord, Channel, ChannelStatus, Department, Discount, GroupBlock,
    GuestProfile, GuestTag, InventoryAvailability, LogEntry, LogPriority, LogStatus, Money,
    Occupancy, PaymentRecord, Promotion, RatePrice, Reservation, ReservationStatus, Review,
    ReviewSentiment, ReviewSource, Room, RoomStatus,
};

use crate::error::{StoreError, StoreResult};

/// Every collection the store holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Seed {
    pub rooms: Vec<Room>,
    pub reservations: Vec<Reservation>,
    pub groups: Vec<GroupBlock>,
    pub logs: Vec<LogEntry>,
    pub rates: Vec<RatePrice>,
    pub inventory: Vec<InventoryAvailability>,
    pub channels: Vec<Channel>,
    pub promotions: Vec<Promotion>,
    pub payments: Vec<PaymentRecord>,
    pub charges: Vec<ChargeRecord>,
    pub guests: Vec<GuestProfile>,
    pub reviews: Vec<Review>,
}

// =============================================================================
// Demo Tables
// =============================================================================

/// Days of rates and inventory generated from the business date.
pub const DEMO_HORIZON_DAYS: i64 = 31;

/// (room type, nightly rate in rupees, rooms of that type on sale)
const ROOM_TYPES: &[(&str, i64, u32)] = &[("Deluxe", 5000, 4), ("Standard", 3000, 4), ("Suite", 8000, 2)];

/// (id, number, type, floor, status)
const ROOMS: &[(&str, &str, &str, i32, RoomStatus)] = &[
    ("1", "101", "Deluxe", 1, RoomStatus::Occupied),
    ("2", "102", "Deluxe", 1, RoomStatus::Departing),
    ("3", "103", "Standard", 1, RoomStatus::Dirty),
    ("4", "104", "Standard", 1, RoomStatus::Available),
    ("5", "105", "Suite", 1, RoomStatus::Arriving),
    ("6", "201", "Deluxe", 2, RoomStatus::Maintenance),
    ("7", "202", "Deluxe", 2, RoomStatus::Occupied),
    ("8", "203", "Standard", 2, RoomStatus::Available),
    ("9", "204", "Standard", 2, RoomStatus::Arriving),
    ("10", "205", "Suite", 2, RoomStatus::Occupied),
    ("11", "301", "Deluxe", 3, RoomStatus::Available),
    ("12", "302", "Deluxe", 3, RoomStatus::Dirty),
];

/// Stay window relative to the business date, in days.
#[derive(Clone, Copy)]
struct Stay {
    from: i64,
    to: i64,
}

const LAST_NIGHT: Stay = Stay { from: -1, to: 1 };
const DUE_OUT: Stay = Stay { from: -1, to: 0 };
const WEEK: Stay = Stay { from: 0, to: 7 };
const ONE_NIGHT: Stay = Stay { from: 0, to: 1 };
const LONG_STAY: Stay = Stay { from: -1, to: 7 };

struct DemoReservation {
    id: &'static str,
    guest: &'static str,
    email: &'static str,
    phone: &'static str,
    room_type: &'static str,
    room_number: Option<&'static str>,
    stay: Stay,
    guests: u32,
    source: BookingSource,
    status: ReservationStatus,
    total: i64,
    paid: i64,
    /// Sum of this reservation's rows in `CHARGES`.
    incidentals: i64,
    group_id: Option<&'static str>,
}

const RESERVATIONS: &[DemoReservation] = &[
    DemoReservation {
        id: "1",
        guest: "Rajesh Kumar",
        email: "rajesh@email.com",
        phone: "+91 98765 43210",
        room_type: "Deluxe",
        room_number: Some("101"),
        stay: LAST_NIGHT,
        guests: 2,
        source: BookingSource::BookingCom,
        status: ReservationStatus::CheckedIn,
        total: 5000,
        paid: 2500,
        incidentals: 0,
        group_id: Some("1"),
    },
    DemoReservation {
        id: "2",
        guest: "Priya Sharma",
        email: "priya@email.com",
        phone: "+91 98765 43211",
        room_type: "Deluxe",
        room_number: Some("102"),
        stay: DUE_OUT,
        guests: 1,
        source: BookingSource::Direct,
        status: ReservationStatus::CheckedIn,
        total: 3000,
        paid: 3000,
        incidentals: 0,
        group_id: Some("1"),
    },
    DemoReservation {
        id: "3",
        guest: "Amit Patel",
        email: "amit@email.com",
        phone: "+91 98765 43212",
        room_type: "Suite",
        room_number: Some("105"),
        stay: WEEK,
        guests: 3,
        source: BookingSource::Website,
        status: ReservationStatus::Confirmed,
        total: 15000,
        paid: 5000,
        incidentals: 0,
        group_id: Some("2"),
    },
    DemoReservation {
        id: "4",
        guest: "Sneha Reddy",
        email: "sneha@email.com",
        phone: "+91 98765 43213",
        room_type: "Deluxe",
        room_number: Some("202"),
        stay: LAST_NIGHT,
        guests: 2,
        source: BookingSource::Agoda,
        status: ReservationStatus::CheckedIn,
        total: 4500,
        paid: 4500,
        incidentals: 0,
        group_id: Some("2"),
    },
    DemoReservation {
        id: "5",
        guest: "Vikram Singh",
        email: "vikram@email.com",
        phone: "+91 98765 43214",
        room_type: "Standard",
        room_number: Some("204"),
        stay: ONE_NIGHT,
        guests: 2,
        source: BookingSource::BookingCom,
        status: ReservationStatus::Confirmed,
        total: 2500,
        paid: 0,
        incidentals: 0,
        group_id: None,
    },
    DemoReservation {
        id: "6",
        guest: "Anjali Verma",
        email: "anjali@email.com",
        phone: "+91 98765 43215",
        room_type: "Suite",
        room_number: Some("205"),
        stay: LONG_STAY,
        guests: 2,
        source: BookingSource::Website,
        status: ReservationStatus::CheckedIn,
        total: 12000,
        paid: 12000,
        incidentals: 4500,
        group_id: None,
    },
    DemoReservation {
        id: "7",
        guest: "Kiran Desai",
        email: "kiran@email.com",
        phone: "+91 98765 43216",
        room_type: "Standard",
        room_number: None,
        stay: ONE_NIGHT,
        guests: 1,
        source: BookingSource::Phone,
        status: ReservationStatus::Confirmed,
        total: 2000,
        paid: 0,
        incidentals: 0,
        group_id: None,
    },
];

/// (id, name, minutes since last sync, status)
const CHANNELS: &[(&str, &str, i64, ChannelStatus)] = &[
    ("1", "Booking.com", 0, ChannelStatus::Synced),
    ("2", "MakeMyTrip", 5, ChannelStatus::Synced),
    ("3", "Agoda", 10, ChannelStatus::Syncing),
    ("4", "Goibibo", 3, ChannelStatus::Synced),
    ("5", "Expedia", 120, ChannelStatus::Error),
    ("6", "Airbnb", 2, ChannelStatus::Synced),
];

/// (id, message, author, hours ago, status, priority)
const LOGS: &[(&str, &str, &str, i64, LogStatus, LogPriority)] = &[
    (
        "1",
        "Room 201 AC not working. Maintenance team notified.",
        "Ravi Kumar",
        0,
        LogStatus::Open,
        LogPriority::High,
    ),
    (
        "2",
        "Guest in 102 requested early checkout tomorrow at 8 AM",
        "Priya Singh",
        1,
        LogStatus::Open,
        LogPriority::Medium,
    ),
    (
        "3",
        "Infosys group arrival confirmed for 3 PM today",
        "Amit Sharma",
        2,
        LogStatus::Resolved,
        LogPriority::Medium,
    ),
    (
        "4",
        "Stock update: Toiletries low, order placed",
        "Neha Patel",
        3,
        LogStatus::Resolved,
        LogPriority::Low,
    ),
];

/// (id, reservation id, department, description, hours ago, rupees)
const CHARGES: &[(&str, &str, Department, &str, i64, i64)] = &[
    ("1", "6", Department::FoodAndBeverage, "Dinner at Rooftop Grill", 14, 3500),
    ("2", "6", Department::Laundry, "Laundry Service", 2, 1000),
];

struct DemoGuest {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    visits: u32,
    spend: i64,
    tags: &'static [GuestTag],
    /// Days before the business date.
    last_visit: i64,
    preferences: &'static [&'static str],
}

const GUESTS: &[DemoGuest] = &[
    DemoGuest {
        id: "gst_01",
        name: "Rohan Verma",
        email: "rohan.v@example.com",
        phone: "+91 98765 43210",
        visits: 5,
        spend: 150_000,
        tags: &[GuestTag::Vip, GuestTag::Corporate],
        last_visit: 32,
        preferences: &["High-floor room", "Foam pillows"],
    },
    DemoGuest {
        id: "gst_02",
        name: "Anika Sharma",
        email: "anika.s@example.com",
        phone: "+91 91234 56789",
        visits: 2,
        spend: 45_000,
        tags: &[GuestTag::Honeymoon],
        last_visit: 58,
        preferences: &[],
    },
    DemoGuest {
        id: "gst_03",
        name: "Priya Patel",
        email: "priya.p@example.com",
        phone: "+91 99887 76655",
        visits: 1,
        spend: 12_000,
        tags: &[GuestTag::Family],
        last_visit: 16,
        preferences: &["Requires a quiet room"],
    },
    DemoGuest {
        id: "gst_04",
        name: "Sameer Khan",
        email: "sameer.k@example.com",
        phone: "+91 97654 32109",
        visits: 3,
        spend: 82_000,
        tags: &[GuestTag::Corporate],
        last_visit: 98,
        preferences: &[],
    },
];

/// (id, source, guest, rating, title, content, days ago, sentiment, replied)
#[allow(clippy::type_complexity)]
const REVIEWS: &[(&str, ReviewSource, &str, u8, &str, &str, i64, ReviewSentiment, bool)] = &[
    (
        "rev_01",
        ReviewSource::Google,
        "Rohan V.",
        5,
        "Exceptional Stay!",
        "The service was impeccable from start to finish.",
        29,
        ReviewSentiment::Positive,
        true,
    ),
    (
        "rev_02",
        ReviewSource::MakeMyTrip,
        "Isha K.",
        3,
        "Decent but could be better",
        "The room was clean, but the breakfast options were quite limited.",
        25,
        ReviewSentiment::Neutral,
        false,
    ),
    (
        "rev_03",
        ReviewSource::BookingCom,
        "Anonymous",
        2,
        "Disappointing Experience",
        "The AC in our room was not working properly and it took hours to fix.",
        12,
        ReviewSentiment::Negative,
        false,
    ),
    (
        "rev_04",
        ReviewSource::Google,
        "Priya Patel",
        4,
        "Wonderful Family Trip",
        "The pool is fantastic for kids and the staff is very accommodating.",
        9,
        ReviewSentiment::Positive,
        true,
    ),
];

// =============================================================================
// Construction
// =============================================================================

impl Seed {
    /// An empty property.
    pub fn empty() -> Self {
        Seed::default()
    }

    /// Parses a seed from JSON in the same camelCase shape the store
    /// serializes to.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        serde_json::from_str(json).map_err(|e| StoreError::Seed(e.to_string()))
    }

    /// Reads a JSON seed file.
    pub fn from_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| StoreError::Seed(format!("{}: {}", path.display(), e)))?;
        Seed::from_json(&json)
    }

    /// The demo property laid out around `today`.
    pub fn demo(today: NaiveDate) -> Self {
        let day = |offset: i64| today + Duration::days(offset);

        // Logs and channels are stamped relative to 09:00 UTC on the business date
        let opening: DateTime<Utc> = today.and_time(NaiveTime::default()).and_utc() + Duration::hours(9);

        let reservations: Vec<Reservation> = RESERVATIONS
            .iter()
            .map(|r| Reservation {
                id: r.id.to_string(),
                confirmation_number: format!("RES{:03}", r.id.parse::<u32>().unwrap_or_default()),
                guest_name: r.guest.to_string(),
                guest_email: r.email.to_string(),
                guest_phone: r.phone.to_string(),
                room_type: r.room_type.to_string(),
                room_number: r.room_number.map(str::to_string),
                check_in: day(r.stay.from),
                check_out: day(r.stay.to),
                number_of_guests: r.guests,
                source: r.source,
                status: r.status,
                total_amount: Money::from_major(r.total),
                paid_amount: Money::from_major(r.paid),
                incidentals: Money::from_major(r.incidentals),
                notes: None,
                group_id: r.group_id.map(str::to_string),
            })
            .collect();

        let rooms = ROOMS
            .iter()
            .map(|&(id, number, room_type, floor, status)| {
                let mut room = Room::vacant(id, number, room_type, floor);
                room.status = status;
                if status.requires_occupancy() {
                    room.occupancy = reservations
                        .iter()
                        .find(|r| r.room_number.as_deref() == Some(number))
                        .map(Occupancy::for_reservation);
                }
                room
            })
            .collect();

        let groups = vec![
            GroupBlock {
                id: "1".to_string(),
                name: "Infosys Corporate Event".to_string(),
                contact_person: "Ramesh Gupta".to_string(),
                contact_email: "ramesh@infosys.com".to_string(),
                contact_phone: "+91 98765 11111".to_string(),
                check_in: day(0),
                check_out: day(7),
                total_rooms: 20,
                assigned_rooms: 15,
                reservation_ids: vec!["1".to_string(), "2".to_string()],
                total_amount: Money::from_major(80_000),
                paid_amount: Money::from_major(40_000),
                notes: Some("Conference hall booking required".to_string()),
            },
            GroupBlock {
                id: "2".to_string(),
                name: "Sharma Wedding".to_string(),
                contact_person: "Sunita Sharma".to_string(),
                contact_email: "sunita@email.com".to_string(),
                contact_phone: "+91 98765 22222".to_string(),
                check_in: day(1),
                check_out: day(7),
                total_rooms: 30,
                assigned_rooms: 25,
                reservation_ids: vec!["3".to_string(), "4".to_string()],
                total_amount: Money::from_major(150_000),
                paid_amount: Money::from_major(50_000),
                notes: Some("Banquet hall + catering".to_string()),
            },
        ];

        let logs = LOGS
            .iter()
            .map(|&(id, message, author, hours_ago, status, priority)| LogEntry {
                id: id.to_string(),
                message: message.to_string(),
                author: author.to_string(),
                timestamp: opening - Duration::hours(hours_ago),
                status,
                priority: Some(priority),
            })
            .collect();

        let mut rates = Vec::new();
        let mut inventory = Vec::new();
        for offset in 0..DEMO_HORIZON_DAYS {
            for (type_idx, &(room_type, rate, total)) in ROOM_TYPES.iter().enumerate() {
                rates.push(RatePrice {
                    room_type: room_type.to_string(),
                    date: day(offset),
                    price: Money::from_major(rate),
                });

                let sold = ((offset as usize + type_idx) % 3) as u32;
                inventory.push(InventoryAvailability {
                    room_type: room_type.to_string(),
                    date: day(offset),
                    available: total.saturating_sub(sold),
                    total,
                });
            }
        }

        let channels = CHANNELS
            .iter()
            .map(|&(id, name, minutes_ago, status)| Channel {
                id: id.to_string(),
                name: name.to_string(),
                status,
                last_sync: opening - Duration::minutes(minutes_ago),
                last_error: (status == ChannelStatus::Error)
                    .then(|| "Connection timed out".to_string()),
            })
            .collect();

        let promotions = vec![
            Promotion {
                id: "1".to_string(),
                name: "Diwali Special".to_string(),
                start_date: day(0),
                end_date: day(10),
                discount: Discount::Percentage { value: 20 },
                room_types: vec!["Deluxe".to_string(), "Suite".to_string()],
                min_stay_length: Some(2),
                is_active: true,
            },
            Promotion {
                id: "2".to_string(),
                name: "Weekend Getaway".to_string(),
                start_date: day(5),
                end_date: day(15),
                discount: Discount::Fixed {
                    value: Money::from_major(1000),
                },
                room_types: vec!["Standard".to_string(), "Deluxe".to_string()],
                min_stay_length: Some(1),
                is_active: true,
            },
            Promotion {
                id: "3".to_string(),
                name: "Stay 3 Pay 2".to_string(),
                start_date: day(-5),
                end_date: day(20),
                discount: Discount::StayPay {
                    stay_nights: 3,
                    pay_nights: 2,
                },
                room_types: vec![
                    "Deluxe".to_string(),
                    "Standard".to_string(),
                    "Suite".to_string(),
                ],
                min_stay_length: Some(3),
                is_active: false,
            },
        ];

        let charges = CHARGES
            .iter()
            .map(|&(id, res_id, department, description, hours_ago, amount)| ChargeRecord {
                id: id.to_string(),
                reservation_id: res_id.to_string(),
                department,
                description: description.to_string(),
                amount: Money::from_major(amount),
                posted_at: opening - Duration::hours(hours_ago),
            })
            .collect();

        let guests = GUESTS
            .iter()
            .map(|g| GuestProfile {
                id: g.id.to_string(),
                name: g.name.to_string(),
                email: g.email.to_string(),
                phone: g.phone.to_string(),
                total_visits: g.visits,
                total_spend: Money::from_major(g.spend),
                tags: g.tags.to_vec(),
                last_visit: Some(day(-g.last_visit)),
                preferences: g.preferences.iter().map(|p| p.to_string()).collect(),
                notes: None,
            })
            .collect();

        let reviews = REVIEWS
            .iter()
            .map(
                |&(id, source, guest, rating, title, content, days_ago, sentiment, replied)| Review {
                    id: id.to_string(),
                    source,
                    guest_name: guest.to_string(),
                    rating,
                    title: title.to_string(),
                    content: content.to_string(),
                    date: day(-days_ago),
                    sentiment,
                    replied,
                },
            )
            .collect();

        Seed {
            rooms,
            reservations,
            groups,
            logs,
            rates,
            inventory,
            channels,
            promotions,
            payments: Vec::new(),
            charges,
            guests,
            reviews,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 17).unwrap()
    }

    #[test]
    fn test_demo_sizes() {
        let seed = Seed::demo(today());
        assert_eq!(seed.rooms.len(), 12);
        assert_eq!(seed.reservations.len(), 7);
        assert_eq!(seed.groups.len(), 2);
        assert_eq!(seed.logs.len(), 4);
        assert_eq!(seed.rates.len(), 31 * 3);
        assert_eq!(seed.inventory.len(), 31 * 3);
        assert_eq!(seed.channels.len(), 6);
        assert_eq!(seed.promotions.len(), 3);
        assert_eq!(seed.charges.len(), 2);
        assert_eq!(seed.guests.len(), 4);
        assert_eq!(seed.reviews.len(), 4);
    }

    #[test]
    fn test_demo_charges_match_incidentals() {
        let seed = Seed::demo(today());
        for res in &seed.reservations {
            let posted: Money = seed
                .charges
                .iter()
                .filter(|c| c.reservation_id == res.id)
                .map(|c| c.amount)
                .sum();
            assert_eq!(posted, res.incidentals, "reservation {}", res.id);
        }
    }

    #[test]
    fn test_demo_rooms_satisfy_occupancy_invariant() {
        for room in Seed::demo(today()).rooms {
            assert!(room.validate().is_ok(), "room {} is inconsistent", room.room_number);
        }
    }

    #[test]
    fn test_demo_inventory_is_deterministic() {
        let a = Seed::demo(today());
        let b = Seed::demo(today());
        assert_eq!(a.inventory, b.inventory);
        assert!(a.inventory.iter().all(|i| i.available <= i.total));
        assert!(a.inventory.iter().any(|i| i.available < i.total));
    }

    #[test]
    fn test_demo_reservation_numbers() {
        let seed = Seed::demo(today());
        assert_eq!(seed.reservations[0].confirmation_number, "RES001");
        assert_eq!(seed.reservations[6].confirmation_number, "RES007");
        assert_eq!(
            seed.reservations[0].check_in,
            NaiveDate::from_ymd_opt(2025, 10, 16).unwrap()
        );
    }

    #[test]
    fn test_json_round_trip() {
        let seed = Seed::demo(today());
        let json = serde_json::to_string(&seed).unwrap();
        assert_eq!(Seed::from_json(&json).unwrap(), seed);
    }

    #[test]
    fn test_bad_json_is_a_seed_error() {
        assert!(matches!(Seed::from_json("{ rooms: "), Err(StoreError::Seed(_))));
    }

    #[test]
    fn test_partial_json_defaults_missing_collections() {
        let seed = Seed::from_json(r#"{"rooms": []}"#).unwrap();
        assert_eq!(seed, Seed::empty());
    }
}
