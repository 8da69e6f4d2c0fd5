/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const V1_ROUTE_COMPONENT: &str = "v1";
pub const V1_ROUTE_PREFIX: &str = const_str::concat!(API_ROUTE_PREFIX, "/", V1_ROUTE_COMPONENT);

pub const V2_ROUTE_COMPONENT: &str = "v2";
pub const V2_ROUTE_PREFIX: &str = const_str::concat!(API_ROUTE_PREFIX, "/", V2_ROUTE_COMPONENT);

pub const PARKS_ROUTE_COMPONENT: &str = "nationalparks";
pub const PARKS_ROUTE_PREFIX: &str =
    const_str::concat!(V1_ROUTE_PREFIX, "/", PARKS_ROUTE_COMPONENT);

pub const TRAIL_ROUTE_COMPONENT: &str = "trail";
pub const TRAIL_ROUTE_PREFIX: &str =
    const_str::concat!(V1_ROUTE_PREFIX, "/", TRAIL_ROUTE_COMPONENT);

pub const USERS_ROUTE_COMPONENT: &str = "users";
pub const USERS_ROUTE_PREFIX: &str =
    const_str::concat!(V1_ROUTE_PREFIX, "/", USERS_ROUTE_COMPONENT);
