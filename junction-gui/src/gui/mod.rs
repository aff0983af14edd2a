use std::sync::Arc;

use iced::Task;
use tracing::{error, info, warn};
use tracing_subscriber::filter::LevelFilter;

use junction_ui::widget::Element;

use crate::{
    auth::{self, AuthForm},
    dashboard::{self, Dashboard},
    dir::JunctionDirectory,
    home::{self, Home},
    logger::setup_logger,
    services::auth::{AuthBackend, AuthClient},
    session::{FileSessionStore, Session, SessionRecord, SessionStore},
    VERSION,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub junction_directory: JunctionDirectory,
    pub api_url: String,
}

impl Config {
    pub fn new(junction_directory: JunctionDirectory, api_url: String) -> Self {
        Self {
            junction_directory,
            api_url,
        }
    }
}

enum State {
    Home(Home),
    Auth(Box<AuthForm>),
    Dashboard(Box<Dashboard>),
}

pub struct GUI {
    state: State,
    client: Arc<dyn AuthBackend>,
    store: Arc<dyn SessionStore>,
}

#[derive(Debug)]
pub enum Message {
    CtrlC,
    SessionRestored(Option<SessionRecord>),
    Home(home::Message),
    Auth(auth::Message),
    Dashboard(dashboard::Message),
}

async fn ctrl_c() -> Result<(), ()> {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("{}", e);
    };
    info!("Signal received, exiting");
    Ok(())
}

impl GUI {
    pub fn title(&self) -> String {
        match &self.state {
            State::Home(_) => format!("Job Junction v{}", VERSION),
            State::Auth(_) => "Job Junction - Login".to_string(),
            State::Dashboard(_) => "Job Junction - Dashboard".to_string(),
        }
    }

    pub fn new((config, log_level): (Config, Option<LevelFilter>)) -> (GUI, Task<Message>) {
        let log_level = log_level.unwrap_or(LevelFilter::INFO);
        if let Err(e) = setup_logger(log_level, config.junction_directory.clone()) {
            tracing::warn!("Error while setting logger: {}", e);
        }

        let client: Arc<dyn AuthBackend> = Arc::new(AuthClient::new(config.api_url.clone()));
        let store: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(
            &config.junction_directory,
        ));

        let restore = {
            let store = store.clone();
            Task::perform(
                async move {
                    match store.load().await {
                        Ok(record) => record,
                        Err(e) => {
                            warn!("Failed to read the session file: {}", e);
                            None
                        }
                    }
                },
                Message::SessionRestored,
            )
        };

        (
            Self {
                state: State::Home(Home::new()),
                client,
                store,
            },
            Task::batch(vec![Task::perform(ctrl_c(), |_| Message::CtrlC), restore]),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match (&mut self.state, message) {
            (_, Message::CtrlC) => iced::window::get_latest().and_then(iced::window::close),
            // A durable session found at startup skips the form, but only as
            // long as the user did not navigate away from the landing page in
            // the meantime.
            (State::Home(_), Message::SessionRestored(Some(record))) => {
                let session: Session = record.into();
                if session.is_authenticated() {
                    info!("restored the session of {}", session.role);
                    self.state = State::Dashboard(Box::new(Dashboard::new(session)));
                }
                Task::none()
            }
            (_, Message::SessionRestored(_)) => Task::none(),
            (State::Home(_), Message::Home(home::Message::SelectRole(role))) => {
                self.state = State::Auth(Box::new(AuthForm::new(role)));
                Task::none()
            }
            (
                State::Auth(_),
                Message::Auth(auth::Message::View(auth::ViewMessage::BackToHome)),
            ) => {
                self.state = State::Home(Home::new());
                Task::none()
            }
            (State::Auth(_), Message::Auth(auth::Message::LoggedIn(session))) => {
                info!("logged in as {}", session.role);
                self.state = State::Dashboard(Box::new(Dashboard::new(session)));
                Task::none()
            }
            (State::Auth(form), Message::Auth(msg)) => form
                .update(self.client.clone(), self.store.clone(), msg)
                .map(Message::Auth),
            (State::Dashboard(_), Message::Dashboard(dashboard::Message::LoggedOut(res))) => {
                if let Err(e) = res {
                    warn!("Failed to clear the session file: {}", e);
                }
                self.state = State::Home(Home::new());
                Task::none()
            }
            (State::Dashboard(dashboard), Message::Dashboard(msg)) => dashboard
                .update(self.store.clone(), msg)
                .map(Message::Dashboard),
            _ => Task::none(),
        }
    }

    pub fn view(&self) -> Element<Message> {
        match &self.state {
            State::Home(home) => home.view().map(Message::Home),
            State::Auth(form) => form.view().map(Message::Auth),
            State::Dashboard(dashboard) => dashboard.view().map(Message::Dashboard),
        }
    }

    pub fn scale_factor(&self) -> f64 {
        1.0
    }
}
