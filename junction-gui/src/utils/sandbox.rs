use std::sync::Arc;

use iced::futures::StreamExt;
use iced_runtime::{task::into_stream, Action};

use crate::{
    auth::{AuthForm, Message},
    services::auth::AuthBackend,
    session::SessionStore,
};

/// Drives the authentication form outside of an iced runtime: tasks produced
/// by an update are executed to completion and their outputs fed back into the
/// form. Messages addressed to the host application are collected and
/// returned instead.
pub struct Sandbox {
    form: AuthForm,
}

impl Sandbox {
    pub fn new(form: AuthForm) -> Self {
        Self { form }
    }

    pub fn form(&self) -> &AuthForm {
        &self.form
    }

    pub async fn update(
        &mut self,
        client: Arc<dyn AuthBackend>,
        store: Arc<dyn SessionStore>,
        message: Message,
    ) -> Vec<Message> {
        let mut bubbled = Vec::new();
        let mut pending = vec![self.form.update(client.clone(), store.clone(), message)];
        while let Some(task) = pending.pop() {
            if let Some(mut stream) = into_stream(task) {
                while let Some(action) = stream.next().await {
                    if let Action::Output(message) = action {
                        if matches!(message, Message::LoggedIn(_)) {
                            bubbled.push(message);
                        } else {
                            pending.push(self.form.update(
                                client.clone(),
                                store.clone(),
                                message,
                            ));
                        }
                    }
                }
            }
        }
        bubbled
    }
}
