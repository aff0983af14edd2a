pub mod schema;

use std::sync::Arc;

use iced::{Alignment, Length, Task};

use junction_ui::{
    component::{button, form, notification, text::*},
    widget::*,
};

use crate::{
    services::auth::{
        api::{LoginRequest, SignupRequest, SignupResponse},
        AuthBackend, AuthError,
    },
    session::{Role, Session, SessionError, SessionRecord, SessionStore},
};

#[derive(Debug, Clone)]
pub enum Error {
    Auth(AuthError),
    Session(SessionError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Auth(e) => write!(f, "Authentication error: {}", e),
            Self::Session(e) => write!(f, "Session file error: {}", e),
        }
    }
}

impl From<AuthError> for Error {
    fn from(value: AuthError) -> Self {
        Self::Auth(value)
    }
}

impl From<SessionError> for Error {
    fn from(value: SessionError) -> Self {
        Self::Session(value)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    View(ViewMessage),
    // None means the service rejected the credentials without an error
    // status: nothing to store, nothing to navigate to.
    LoginComplete(Result<Option<Session>, Error>),
    SignupComplete(Result<SignupResponse, Error>),
    // handled by the upper level wrapping the form.
    LoggedIn(Session),
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    NameEdited(String),
    EmailEdited(String),
    PhoneEdited(String),
    PasswordEdited(String),
    CityEdited(String),
    ToggleMode,
    Submit,
    BackToHome,
}

/// Which persona of the form is active. Which fields render and which schema
/// applies both follow from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Login,
    Register,
}

#[derive(Debug, Clone, Default)]
pub struct Fields {
    pub name: form::Value<String>,
    pub email: form::Value<String>,
    pub phone: form::Value<String>,
    pub password: form::Value<String>,
    pub city: form::Value<String>,
}

pub struct AuthForm {
    pub role: Role,
    pub mode: FormMode,
    pub fields: Fields,
    pub processing: bool,
    pub connection_error: Option<Error>,
}

fn apply(value: &mut form::Value<String>, warning: Option<&'static str>) -> bool {
    value.warning = warning;
    value.valid = warning.is_none();
    value.valid
}

impl AuthForm {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            mode: FormMode::Login,
            fields: Fields::default(),
            processing: false,
            connection_error: None,
        }
    }

    /// Flips Login<->Register and fully resets the form.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            FormMode::Login => FormMode::Register,
            FormMode::Register => FormMode::Login,
        };
        self.fields = Fields::default();
        self.connection_error = None;
    }

    /// Applies the active schema to every field at once, so that a submit
    /// attempt surfaces all the missing fields simultaneously.
    fn validate(&mut self) -> bool {
        let email_warning = schema::email(&self.fields.email.value);
        let password_warning = schema::required(&self.fields.password.value);

        let mut valid = apply(&mut self.fields.email, email_warning);
        valid &= apply(&mut self.fields.password, password_warning);

        if self.mode == FormMode::Register {
            let name_warning = schema::required(&self.fields.name.value);
            let phone_warning = schema::phone(&self.fields.phone.value);
            let city_warning = schema::required(&self.fields.city.value);

            valid &= apply(&mut self.fields.name, name_warning);
            valid &= apply(&mut self.fields.phone, phone_warning);
            valid &= apply(&mut self.fields.city, city_warning);
        }

        valid
    }

    pub fn update(
        &mut self,
        client: Arc<dyn AuthBackend>,
        store: Arc<dyn SessionStore>,
        message: Message,
    ) -> Task<Message> {
        match message {
            Message::View(ViewMessage::NameEdited(value)) => {
                apply(&mut self.fields.name, None);
                self.fields.name.value = value;
            }
            Message::View(ViewMessage::EmailEdited(value)) => {
                // Syntax feedback while typing, emptiness is only reported on
                // a submit attempt.
                let warning = if value.is_empty() {
                    None
                } else {
                    schema::email(&value)
                };
                apply(&mut self.fields.email, warning);
                self.fields.email.value = value;
            }
            Message::View(ViewMessage::PhoneEdited(value)) => {
                let warning = if value.is_empty() {
                    None
                } else {
                    schema::phone(&value)
                };
                apply(&mut self.fields.phone, warning);
                self.fields.phone.value = value;
            }
            Message::View(ViewMessage::PasswordEdited(value)) => {
                apply(&mut self.fields.password, None);
                self.fields.password.value = value;
            }
            Message::View(ViewMessage::CityEdited(value)) => {
                apply(&mut self.fields.city, None);
                self.fields.city.value = value;
            }
            Message::View(ViewMessage::ToggleMode) => {
                self.toggle_mode();
            }
            Message::View(ViewMessage::Submit) => {
                // A submission already in flight swallows further submits.
                if self.processing || !self.validate() {
                    return Task::none();
                }
                self.processing = true;
                self.connection_error = None;
                match self.mode {
                    FormMode::Login => {
                        let credentials = LoginRequest {
                            email: self.fields.email.value.clone(),
                            password: self.fields.password.value.clone(),
                        };
                        let role = self.role;
                        return Task::perform(
                            async move { login(client, store, role, credentials).await },
                            Message::LoginComplete,
                        );
                    }
                    FormMode::Register => {
                        let profile = SignupRequest {
                            name: self.fields.name.value.clone(),
                            email: self.fields.email.value.clone(),
                            phone: self.fields.phone.value.clone(),
                            password: self.fields.password.value.clone(),
                            city: self.fields.city.value.clone(),
                        };
                        return Task::perform(
                            async move { client.signup(profile).await.map_err(Error::Auth) },
                            Message::SignupComplete,
                        );
                    }
                }
            }
            // Handled by the upper level wrapping the form.
            Message::View(ViewMessage::BackToHome) => {}
            Message::LoginComplete(res) => {
                self.processing = false;
                match res {
                    Ok(Some(session)) => {
                        self.fields = Fields::default();
                        return Task::perform(async move { session }, Message::LoggedIn);
                    }
                    Ok(None) => {
                        // The service rejected the credentials with an empty
                        // body: the credentials are dropped and the form stays
                        // in place.
                        self.fields = Fields::default();
                    }
                    Err(e) => {
                        tracing::warn!("{}", e);
                        self.connection_error = Some(e);
                    }
                }
            }
            Message::SignupComplete(res) => {
                self.processing = false;
                match res {
                    Ok(_) => {
                        // No session is created on signup, the user logs in
                        // separately.
                        self.mode = FormMode::Login;
                        self.fields = Fields::default();
                    }
                    Err(e) => {
                        tracing::warn!("{}", e);
                        self.connection_error = Some(e);
                    }
                }
            }
            // Handled by the upper level wrapping the form.
            Message::LoggedIn(_) => {}
        }

        Task::none()
    }

    pub fn view(&self) -> Element<Message> {
        let mut fields = Column::new().spacing(20);
        if self.mode == FormMode::Register {
            fields = fields
                .push(
                    form::Form::new("Name", &self.fields.name, ViewMessage::NameEdited)
                        .size(P1_SIZE)
                        .padding(10),
                )
                .push(
                    form::Form::new_trimmed("Phone", &self.fields.phone, ViewMessage::PhoneEdited)
                        .size(P1_SIZE)
                        .padding(10),
                )
                .push(
                    form::Form::new("City", &self.fields.city, ViewMessage::CityEdited)
                        .size(P1_SIZE)
                        .padding(10),
                );
        }
        fields = fields
            .push(
                form::Form::new_trimmed("Email", &self.fields.email, ViewMessage::EmailEdited)
                    .size(P1_SIZE)
                    .padding(10),
            )
            .push(
                form::Form::new("Password", &self.fields.password, ViewMessage::PasswordEdited)
                    .secure()
                    .size(P1_SIZE)
                    .padding(10),
            );

        let content = Into::<Element<ViewMessage>>::into(
            Container::new(
                Column::new()
                    .align_x(Alignment::Center)
                    .spacing(20)
                    .width(Length::Fill)
                    .push(h2(match self.mode {
                        FormMode::Login => "Log in to Job Junction",
                        FormMode::Register => "Create your account",
                    }))
                    .push(
                        Column::new()
                            .max_width(500)
                            .spacing(20)
                            .align_x(Alignment::Center)
                            .push(fields)
                            .push(
                                button::primary(
                                    None,
                                    match self.mode {
                                        FormMode::Login => "LOGIN",
                                        FormMode::Register => "REGISTER",
                                    },
                                )
                                .width(Length::Fixed(200.0))
                                .on_press_maybe(if self.processing {
                                    None
                                } else {
                                    Some(ViewMessage::Submit)
                                }),
                            )
                            .push(
                                button::link(
                                    None,
                                    match self.mode {
                                        FormMode::Login => {
                                            "Don't have an account? Sign Up here."
                                        }
                                        FormMode::Register => {
                                            "Already have an account? Login here."
                                        }
                                    },
                                )
                                .on_press(ViewMessage::ToggleMode),
                            ),
                    ),
            )
            .padding(50)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
        )
        .map(Message::View);

        let mut col = Column::new();
        if let Some(error) = &self.connection_error {
            col = col.push(
                notification::warning("Connection failed".to_string(), error.to_string())
                    .width(Length::Fill),
            );
        }

        col.push(
            Container::new(
                button::secondary(None, "Go back")
                    .width(Length::Fixed(200.0))
                    .on_press(Message::View(ViewMessage::BackToHome)),
            )
            .padding(20),
        )
        .push(content)
        .into()
    }
}

async fn login(
    client: Arc<dyn AuthBackend>,
    store: Arc<dyn SessionStore>,
    role: Role,
    credentials: LoginRequest,
) -> Result<Option<Session>, Error> {
    let response = client.login(credentials).await?;
    tracing::debug!("login response received from the auth service");

    let (user, token) = match (response.user, response.token) {
        (Some(user), Some(token)) if !token.is_empty() => (user, token),
        _ => {
            tracing::warn!("login rejected, the response carried no token");
            return Ok(None);
        }
    };

    store
        .save(&SessionRecord {
            role,
            token: token.clone(),
            user: user.clone(),
        })
        .await?;

    Ok(Some(Session { role, user, token }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::api::{LoginResponse, UserProfile};
    use crate::utils::sandbox::Sandbox;
    use async_trait::async_trait;
    use iced_runtime::task::into_stream;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };

    #[derive(Debug)]
    struct FakeBackend {
        login_result: Result<LoginResponse, AuthError>,
        signup_result: Result<SignupResponse, AuthError>,
        calls: AtomicUsize,
    }

    impl FakeBackend {
        fn with_login(result: Result<LoginResponse, AuthError>) -> Self {
            Self {
                login_result: result,
                signup_result: Ok(SignupResponse(serde_json::json!({"status": "ok"}))),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Default for FakeBackend {
        fn default() -> Self {
            Self::with_login(Ok(LoginResponse {
                user: Some(UserProfile {
                    name: Some("Ada".to_string()),
                    email: Some("ada@example.com".to_string()),
                    extra: Default::default(),
                }),
                token: Some("abc123".to_string()),
            }))
        }
    }

    #[async_trait]
    impl AuthBackend for FakeBackend {
        async fn login(&self, _request: LoginRequest) -> Result<LoginResponse, AuthError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.login_result.clone()
        }

        async fn signup(&self, _request: SignupRequest) -> Result<SignupResponse, AuthError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.signup_result.clone()
        }
    }

    #[derive(Debug, Default)]
    struct FakeStore {
        saved: Mutex<Vec<SessionRecord>>,
    }

    impl FakeStore {
        fn saved(&self) -> Vec<SessionRecord> {
            self.saved.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SessionStore for FakeStore {
        async fn save(&self, record: &SessionRecord) -> Result<(), SessionError> {
            self.saved.lock().unwrap().push(record.clone());
            Ok(())
        }

        async fn load(&self) -> Result<Option<SessionRecord>, SessionError> {
            Ok(None)
        }

        async fn clear(&self) -> Result<(), SessionError> {
            self.saved.lock().unwrap().clear();
            Ok(())
        }
    }

    fn edit(field: fn(String) -> ViewMessage, value: &str) -> Message {
        Message::View(field(value.to_string()))
    }

    async fn fill_login(
        sandbox: &mut Sandbox,
        client: &Arc<FakeBackend>,
        store: &Arc<FakeStore>,
        email: &str,
        password: &str,
    ) {
        let client: Arc<dyn AuthBackend> = client.clone();
        let store: Arc<dyn SessionStore> = store.clone();
        sandbox
            .update(
                client.clone(),
                store.clone(),
                edit(ViewMessage::EmailEdited, email),
            )
            .await;
        sandbox
            .update(client, store, edit(ViewMessage::PasswordEdited, password))
            .await;
    }

    #[tokio::test]
    async fn invalid_email_blocks_login_submission() {
        let client = Arc::new(FakeBackend::default());
        let store = Arc::new(FakeStore::default());
        let mut sandbox = Sandbox::new(AuthForm::new(Role::User));

        fill_login(&mut sandbox, &client, &store, "not-an-address", "hunter2").await;
        let bubbled = sandbox
            .update(
                client.clone(),
                store.clone(),
                Message::View(ViewMessage::Submit),
            )
            .await;

        assert!(bubbled.is_empty());
        assert_eq!(client.calls(), 0);
        let form = sandbox.form();
        assert!(!form.fields.email.valid);
        assert_eq!(form.fields.email.warning, Some(schema::INVALID_EMAIL));
        assert!(!form.processing);
    }

    #[tokio::test]
    async fn phone_rule_is_length_only() {
        let client = Arc::new(FakeBackend::default());
        let store = Arc::new(FakeStore::default());
        let mut sandbox = Sandbox::new(AuthForm::new(Role::Worker));

        sandbox
            .update(
                client.clone(),
                store.clone(),
                Message::View(ViewMessage::ToggleMode),
            )
            .await;
        for (constructor, value) in [
            (ViewMessage::NameEdited as fn(String) -> ViewMessage, "Ada"),
            (ViewMessage::EmailEdited, "ada@example.com"),
            (ViewMessage::PhoneEdited, "12345"),
            (ViewMessage::PasswordEdited, "hunter2"),
            (ViewMessage::CityEdited, "London"),
        ] {
            sandbox
                .update(client.clone(), store.clone(), edit(constructor, value))
                .await;
        }
        sandbox
            .update(
                client.clone(),
                store.clone(),
                Message::View(ViewMessage::Submit),
            )
            .await;

        assert_eq!(client.calls(), 0);
        assert_eq!(
            sandbox.form().fields.phone.warning,
            Some(schema::PHONE_LENGTH)
        );

        // Ten characters of anything go through.
        sandbox
            .update(
                client.clone(),
                store.clone(),
                edit(ViewMessage::PhoneEdited, "abcdefghij"),
            )
            .await;
        sandbox
            .update(
                client.clone(),
                store.clone(),
                Message::View(ViewMessage::Submit),
            )
            .await;
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn toggling_mode_resets_fields_idempotently() {
        let client = Arc::new(FakeBackend::default());
        let store = Arc::new(FakeStore::default());
        let mut sandbox = Sandbox::new(AuthForm::new(Role::User));

        fill_login(&mut sandbox, &client, &store, "ada@example", "hunter2").await;
        assert!(!sandbox.form().fields.email.valid);

        sandbox
            .update(
                client.clone(),
                store.clone(),
                Message::View(ViewMessage::ToggleMode),
            )
            .await;
        assert_eq!(sandbox.form().mode, FormMode::Register);
        assert!(sandbox.form().fields.email.value.is_empty());
        assert!(sandbox.form().fields.email.valid);

        sandbox
            .update(
                client.clone(),
                store.clone(),
                Message::View(ViewMessage::ToggleMode),
            )
            .await;
        // Back to the original mode with empty fields, not the original values.
        assert_eq!(sandbox.form().mode, FormMode::Login);
        assert!(sandbox.form().fields.email.value.is_empty());
        assert!(sandbox.form().fields.password.value.is_empty());
    }

    #[tokio::test]
    async fn successful_login_stores_publishes_and_navigates_once() {
        let client = Arc::new(FakeBackend::default());
        let store = Arc::new(FakeStore::default());
        let mut sandbox = Sandbox::new(AuthForm::new(Role::Worker));

        fill_login(&mut sandbox, &client, &store, "ada@example.com", "hunter2").await;
        let bubbled = sandbox
            .update(
                client.clone(),
                store.clone(),
                Message::View(ViewMessage::Submit),
            )
            .await;

        assert_eq!(client.calls(), 1);

        let saved = store.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].token, "abc123");
        // The stored role is the one of the mounting route, not a hardcoded
        // marker.
        assert_eq!(saved[0].role, Role::Worker);

        assert_eq!(bubbled.len(), 1);
        let Message::LoggedIn(session) = &bubbled[0] else {
            panic!("expected a LoggedIn message");
        };
        assert_eq!(session.token, "abc123");
        assert!(session.is_authenticated());

        let form = sandbox.form();
        assert!(!form.processing);
        assert!(form.fields.email.value.is_empty());
        assert!(form.fields.password.value.is_empty());
    }

    #[tokio::test]
    async fn empty_login_response_changes_nothing() {
        let client = Arc::new(FakeBackend::with_login(Ok(LoginResponse::default())));
        let store = Arc::new(FakeStore::default());
        let mut sandbox = Sandbox::new(AuthForm::new(Role::User));

        fill_login(&mut sandbox, &client, &store, "ada@example.com", "wrong").await;
        let bubbled = sandbox
            .update(
                client.clone(),
                store.clone(),
                Message::View(ViewMessage::Submit),
            )
            .await;

        assert!(bubbled.is_empty());
        assert!(store.saved().is_empty());
        let form = sandbox.form();
        assert_eq!(form.mode, FormMode::Login);
        assert!(form.connection_error.is_none());
        // Only the reset issued before the check touched the fields.
        assert!(form.fields.email.value.is_empty());
        assert!(!form.processing);
    }

    #[tokio::test]
    async fn successful_signup_returns_to_login_without_a_session() {
        let client = Arc::new(FakeBackend::default());
        let store = Arc::new(FakeStore::default());
        let mut sandbox = Sandbox::new(AuthForm::new(Role::User));

        sandbox
            .update(
                client.clone(),
                store.clone(),
                Message::View(ViewMessage::ToggleMode),
            )
            .await;
        for (constructor, value) in [
            (ViewMessage::NameEdited as fn(String) -> ViewMessage, "Ada"),
            (ViewMessage::EmailEdited, "ada@example.com"),
            (ViewMessage::PhoneEdited, "0123456789"),
            (ViewMessage::PasswordEdited, "hunter2"),
            (ViewMessage::CityEdited, "London"),
        ] {
            sandbox
                .update(client.clone(), store.clone(), edit(constructor, value))
                .await;
        }
        let bubbled = sandbox
            .update(
                client.clone(),
                store.clone(),
                Message::View(ViewMessage::Submit),
            )
            .await;

        assert_eq!(client.calls(), 1);
        assert!(bubbled.is_empty());
        assert!(store.saved().is_empty());
        let form = sandbox.form();
        assert_eq!(form.mode, FormMode::Login);
        assert!(form.fields.name.value.is_empty());
        assert!(form.fields.email.value.is_empty());
        assert!(!form.processing);
    }

    #[tokio::test]
    async fn empty_register_submit_reports_all_required_fields() {
        let client = Arc::new(FakeBackend::default());
        let store = Arc::new(FakeStore::default());
        let mut sandbox = Sandbox::new(AuthForm::new(Role::User));

        sandbox
            .update(
                client.clone(),
                store.clone(),
                Message::View(ViewMessage::ToggleMode),
            )
            .await;
        sandbox
            .update(
                client.clone(),
                store.clone(),
                Message::View(ViewMessage::Submit),
            )
            .await;

        assert_eq!(client.calls(), 0);
        let fields = &sandbox.form().fields;
        for value in [
            &fields.name,
            &fields.email,
            &fields.phone,
            &fields.password,
            &fields.city,
        ] {
            assert_eq!(value.warning, Some(schema::REQUIRED));
            assert!(!value.valid);
        }
    }

    #[tokio::test]
    async fn reentrant_submit_is_dropped_while_processing() {
        let client = Arc::new(FakeBackend::default());
        let store = Arc::new(FakeStore::default());
        let mut form = AuthForm::new(Role::User);

        let client_dyn: Arc<dyn AuthBackend> = client.clone();
        let store_dyn: Arc<dyn SessionStore> = store.clone();
        form.update(
            client_dyn.clone(),
            store_dyn.clone(),
            edit(ViewMessage::EmailEdited, "ada@example.com"),
        );
        form.update(
            client_dyn.clone(),
            store_dyn.clone(),
            edit(ViewMessage::PasswordEdited, "hunter2"),
        );

        // First submit dispatches and flips the busy flag.
        let first = form.update(
            client_dyn.clone(),
            store_dyn.clone(),
            Message::View(ViewMessage::Submit),
        );
        assert!(into_stream(first).is_some());
        assert!(form.processing);

        // Second submit while in flight produces no task at all.
        let second = form.update(client_dyn, store_dyn, Message::View(ViewMessage::Submit));
        assert!(into_stream(second).is_none());
    }

    #[tokio::test]
    async fn transport_failure_surfaces_an_error_and_returns_to_idle() {
        let client = Arc::new(FakeBackend::with_login(Err(AuthError {
            http_status: None,
            error: "connection reset by peer".to_string(),
        })));
        let store = Arc::new(FakeStore::default());
        let mut sandbox = Sandbox::new(AuthForm::new(Role::User));

        fill_login(&mut sandbox, &client, &store, "ada@example.com", "hunter2").await;
        let bubbled = sandbox
            .update(
                client.clone(),
                store.clone(),
                Message::View(ViewMessage::Submit),
            )
            .await;

        assert!(bubbled.is_empty());
        assert!(store.saved().is_empty());
        let form = sandbox.form();
        assert!(!form.processing);
        assert!(form.connection_error.is_some());
        // Fields are untouched on a failed call.
        assert_eq!(form.fields.email.value, "ada@example.com");
    }
}
