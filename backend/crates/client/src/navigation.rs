//! Routes and the navigation seam

use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    SignIn,
    SignUp,
    Home,
}

impl Route {
    pub const fn path(&self) -> &'static str {
        match self {
            Route::SignIn => "/signin",
            Route::SignUp => "/signup",
            Route::Home => "/",
        }
    }
}

/// Whatever renders pages implements this
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Headless navigator keeping the visited routes
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    visited: Mutex<Vec<Route>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<Route> {
        self.visited
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(path = route.path(), "Navigate");
        self.visited
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(route);
    }
}
