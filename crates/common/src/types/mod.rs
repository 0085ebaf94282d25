use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub status: &'static str,
}

impl Health {
    pub const OK: Health = Health { status: "ok" };
    pub const UNAVAILABLE: Health = Health { status: "unavailable" };
}
