//! Room counts for the front-office dashboard.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::status::RoomStatus;
use crate::types::Room;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: RoomStatus,
    pub count: u32,
}

/// Snapshot of how the property's rooms are split across statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OccupancySummary {
    pub total_rooms: u32,

    /// Every status, in display order, including zero counts.
    pub by_status: Vec<StatusCount>,

    /// Rooms that can be sold tonight (everything but maintenance).
    pub sellable_rooms: u32,

    /// Rooms with a guest in house (occupied + departing).
    pub in_house: u32,

    /// `in_house / sellable_rooms`, as a whole percentage rounded half up.
    pub occupancy_percent: u32,
}

impl OccupancySummary {
    pub fn from_rooms(rooms: &[Room]) -> Self {
        let count = |status: RoomStatus| rooms.iter().filter(|r| r.status == status).count() as u32;

        let by_status: Vec<StatusCount> = RoomStatus::ALL
            .into_iter()
            .map(|status| StatusCount {
                status,
                count: count(status),
            })
            .collect();

        let total_rooms = rooms.len() as u32;
        let sellable_rooms = total_rooms - count(RoomStatus::Maintenance);
        let in_house = count(RoomStatus::Occupied) + count(RoomStatus::Departing);

        let occupancy_percent = if sellable_rooms == 0 {
            0
        } else {
            (in_house * 100 + sellable_rooms / 2) / sellable_rooms
        };

        OccupancySummary {
            total_rooms,
            by_status,
            sellable_rooms,
            in_house,
            occupancy_percent,
        }
    }

    pub fn count(&self, status: RoomStatus) -> u32 {
        self.by_status
            .iter()
            .find(|c| c.status == status)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(n: u32, status: RoomStatus) -> Room {
        let mut room = Room::vacant(n.to_string(), format!("{}", 100 + n), "Deluxe", 1);
        room.status = status;
        room
    }

    #[test]
    fn test_summary_counts() {
        let rooms = vec![
            room(1, RoomStatus::Occupied),
            room(2, RoomStatus::Occupied),
            room(3, RoomStatus::Departing),
            room(4, RoomStatus::Available),
            room(5, RoomStatus::Arriving),
            room(6, RoomStatus::Dirty),
            room(7, RoomStatus::Maintenance),
        ];

        let summary = OccupancySummary::from_rooms(&rooms);
        assert_eq!(summary.total_rooms, 7);
        assert_eq!(summary.sellable_rooms, 6);
        assert_eq!(summary.in_house, 3);
        assert_eq!(summary.occupancy_percent, 50);
        assert_eq!(summary.count(RoomStatus::Occupied), 2);
        assert_eq!(summary.by_status.len(), 6);
        assert_eq!(summary.by_status[0].status, RoomStatus::Occupied);
    }

    #[test]
    fn test_empty_property() {
        let summary = OccupancySummary::from_rooms(&[]);
        assert_eq!(summary.occupancy_percent, 0);
        assert_eq!(summary.count(RoomStatus::Dirty), 0);
    }
}
