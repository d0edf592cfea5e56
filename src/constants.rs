pub mod limits {

    /// The streaming page shows at most this many offers, keeping the
    /// upstream ordering.
    pub const MAX_STREAMING_OFFERS: usize = 3;
}

pub mod http {

    pub const USER_AGENT: &str = concat!("Reelscout/", env!("CARGO_PKG_VERSION"));

    pub const POOL_MAX_IDLE_PER_HOST: usize = 10;
}
