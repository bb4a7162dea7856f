//! Scripted [`AuthApi`] used by session and flow tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use async_trait::async_trait;

use super::api::{ApiError, AuthApi};
use super::types::{Credentials, RefreshedToken, TokenPair};

type Hook = Box<dyn Fn()>;

#[derive(Default)]
pub struct MockApi {
    pub login_results: RefCell<VecDeque<Result<TokenPair, ApiError>>>,
    pub register_results: RefCell<VecDeque<Result<(), ApiError>>>,
    pub refresh_results: RefCell<VecDeque<Result<RefreshedToken, ApiError>>>,
    pub login_calls: Cell<usize>,
    pub register_calls: Cell<usize>,
    pub refresh_calls: Cell<usize>,
    pub refresh_tokens_seen: RefCell<Vec<String>>,
    /// Runs inside `register` before it resolves.
    pub on_register: RefCell<Option<Hook>>,
    /// Runs inside `refresh` before it resolves (simulates work during flight).
    pub on_refresh: RefCell<Option<Hook>>,
}

impl MockApi {
    pub fn with_login(self, result: Result<TokenPair, ApiError>) -> Self {
        self.login_results.borrow_mut().push_back(result);
        self
    }

    pub fn with_register(self, result: Result<(), ApiError>) -> Self {
        self.register_results.borrow_mut().push_back(result);
        self
    }

    pub fn with_refresh(self, result: Result<RefreshedToken, ApiError>) -> Self {
        self.refresh_results.borrow_mut().push_back(result);
        self
    }

    pub fn on_register(self, hook: impl Fn() + 'static) -> Self {
        *self.on_register.borrow_mut() = Some(Box::new(hook));
        self
    }

    pub fn on_refresh(self, hook: impl Fn() + 'static) -> Self {
        *self.on_refresh.borrow_mut() = Some(Box::new(hook));
        self
    }

    pub fn network_calls(&self) -> usize {
        self.login_calls.get() + self.register_calls.get() + self.refresh_calls.get()
    }
}

#[async_trait(?Send)]
impl AuthApi for MockApi {
    async fn login(&self, _credentials: &Credentials) -> Result<TokenPair, ApiError> {
        self.login_calls.set(self.login_calls.get() + 1);
        self.login_results
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(ApiError::Network("unscripted login".to_owned())))
    }

    async fn register(&self, _credentials: &Credentials) -> Result<(), ApiError> {
        self.register_calls.set(self.register_calls.get() + 1);
        if let Some(hook) = self.on_register.borrow().as_ref() {
            hook();
        }
        self.register_results
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(ApiError::Network("unscripted register".to_owned())))
    }

    async fn refresh(&self, refresh_token: &str) -> Result<RefreshedToken, ApiError> {
        self.refresh_calls.set(self.refresh_calls.get() + 1);
        self.refresh_tokens_seen.borrow_mut().push(refresh_token.to_owned());
        if let Some(hook) = self.on_refresh.borrow().as_ref() {
            hook();
        }
        self.refresh_results
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(ApiError::Network("unscripted refresh".to_owned())))
    }
}
