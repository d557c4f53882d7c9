//! Route table and navigation guard

use std::fmt;
use std::str::FromStr;

use crate::error::ResolvError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Login,
    Signup,
    Dashboard,
    ManageTickets,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Landing,
        Route::Login,
        Route::Signup,
        Route::Dashboard,
        Route::ManageTickets,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login => "/auth/login",
            Route::Signup => "/auth/signup",
            Route::Dashboard => "/dashboard",
            Route::ManageTickets => "/tickets/manage",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Landing => "Resolv",
            Route::Login => "Welcome Back",
            Route::Signup => "Create Your Resolv Account",
            Route::Dashboard => "Dashboard",
            Route::ManageTickets => "Manage Tickets",
        }
    }

    /// Routes only reachable with an active session
    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Dashboard | Route::ManageTickets)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = ResolvError;

    /// Accepts paths with or without the leading slash, and a trailing slash.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_matches('/');
        Route::ALL
            .into_iter()
            .find(|route| route.path().trim_start_matches('/') == trimmed)
            .ok_or_else(|| ResolvError::UnknownRoute(s.to_string()))
    }
}

/// Where a navigation attempt ends up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Allowed(Route),
    Redirected { from: Route, to: Route },
}

impl Navigation {
    /// The route actually shown
    pub fn destination(&self) -> Route {
        match self {
            Navigation::Allowed(route) => *route,
            Navigation::Redirected { to, .. } => *to,
        }
    }
}

/// Apply the guard: protected routes send unauthenticated users to login
pub fn navigate(route: Route, authenticated: bool) -> Navigation {
    if route.requires_auth() && !authenticated {
        tracing::debug!("Redirecting {} to {}", route, Route::Login);
        Navigation::Redirected {
            from: route,
            to: Route::Login,
        }
    } else {
        Navigation::Allowed(route)
    }
}
