// Logical keys of the persistent mirror. One JSON blob per key.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Guests,
    DailyStats,
    Settings,
    InLineGuests,
}

impl StorageKey {
    pub const ALL: [StorageKey; 4] = [
        StorageKey::Guests,
        StorageKey::DailyStats,
        StorageKey::Settings,
        StorageKey::InLineGuests,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StorageKey::Guests => "guests",
            StorageKey::DailyStats => "dailyStats",
            StorageKey::Settings => "settings",
            StorageKey::InLineGuests => "inLineGuests",
        }
    }
}
