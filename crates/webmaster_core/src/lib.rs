//! webMaster core: pure session state machine and view-model helpers.
mod effect;
mod error;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use error::SessionError;
pub use msg::Msg;
pub use state::{
    Message, Notification, Origin, Phase, Session, Severity, Theme, ANSWER_RECEIVED_NOTICE,
    ASK_FAILURE_MESSAGE, NOTIFICATION_AUTO_HIDE, SCRAPE_FAILURE_NOTICE, SCRAPE_SUCCESS_MESSAGE,
    SCRAPE_SUCCESS_NOTICE,
};
pub use update::update;
pub use view_model::SessionViewModel;
