//! Action families, one module per concern.
mod basketball;
mod control;
mod field_hockey;
mod football;
mod handball;
mod ice_hockey;
mod volleyball;

pub use basketball::BasketballAction;
pub use control::{ClockAction, MatchAction, ScoreAction};
pub use field_hockey::FieldHockeyAction;
pub use football::FootballAction;
pub use handball::HandballAction;
pub use ice_hockey::IceHockeyAction;
pub use volleyball::VolleyballAction;
