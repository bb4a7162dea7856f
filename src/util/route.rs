//! Known application routes.
//!
//! The router table is built from [`AppRoute::segment`] and the sidebar from
//! [`AppRoute::NAV`], and highlighting compares [`AppRoute`] values rather
//! than path strings, so the two cannot drift apart.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Dashboard,
    Contact,
    Login,
    Register,
    /// Synthetic: visiting it signs the user out.
    Logout,
}

impl AppRoute {
    pub const ALL: [Self; 6] = [Self::Home, Self::Dashboard, Self::Contact, Self::Login, Self::Register, Self::Logout];

    /// Sidebar entries, in display order.
    pub const NAV: [Self; 3] = [Self::Home, Self::Dashboard, Self::Contact];

    /// Router segment, the path without its leading slash.
    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::Dashboard => "dashboard",
            Self::Contact => "contact",
            Self::Login => "login",
            Self::Register => "register",
            Self::Logout => "logout",
        }
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Dashboard => "/dashboard",
            Self::Contact => "/contact",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Logout => "/logout",
        }
    }

    /// Route for a location path. A trailing slash is ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "AI Agents",
            Self::Dashboard => "Numbers",
            Self::Contact => "Contact",
            Self::Login => "Log In",
            Self::Register => "Register",
            Self::Logout => "Sign out",
        }
    }
}
