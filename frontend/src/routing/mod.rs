pub mod guard;

pub use guard::{guard_layout, guard_login, guard_route, session_user_id, CookieJar, Navigation};
