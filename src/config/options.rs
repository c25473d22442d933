// src/config/options.rs
use super::consts::*;

/// Auto-refresh period. Off means manual refresh only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RefreshInterval {
    #[default]
    Off,
    S5,
    S15,
    S30,
    S60,
}

impl RefreshInterval {
    pub const ALL: [RefreshInterval; 5] = [
        RefreshInterval::Off,
        RefreshInterval::S5,
        RefreshInterval::S15,
        RefreshInterval::S30,
        RefreshInterval::S60,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RefreshInterval::Off => "Off",
            RefreshInterval::S5 => "5 s",
            RefreshInterval::S15 => "15 s",
            RefreshInterval::S30 => "30 s",
            RefreshInterval::S60 => "60 s",
        }
    }

    /// Stable token for the config file.
    pub fn key(self) -> &'static str {
        match self {
            RefreshInterval::Off => "off",
            RefreshInterval::S5 => "5",
            RefreshInterval::S15 => "15",
            RefreshInterval::S30 => "30",
            RefreshInterval::S60 => "60",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|iv| iv.key() == s)
    }

    /// None when auto refresh is off.
    pub fn seconds(self) -> Option<u64> {
        match self {
            RefreshInterval::Off => None,
            RefreshInterval::S5 => Some(5),
            RefreshInterval::S15 => Some(15),
            RefreshInterval::S30 => Some(30),
            RefreshInterval::S60 => Some(60),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedOptions {
    pub url: String,
    pub interval: RefreshInterval,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            url: s!(DEFAULT_FEED_URL),
            interval: RefreshInterval::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub feed: FeedOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_keys_round_trip() {
        for iv in RefreshInterval::ALL {
            assert_eq!(RefreshInterval::from_key(iv.key()), Some(iv));
        }
        assert_eq!(RefreshInterval::from_key("7"), None);
    }
}
