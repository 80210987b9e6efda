#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Predict,
    Team,
    NotFound,
}

impl Route {
    /// Routes shown in the navigation bar, in display order.
    pub const NAV: [Route; 4] = [Route::Home, Route::About, Route::Predict, Route::Team];

    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Route::Home,
            "/about" => Route::About,
            "/predict" => Route::Predict,
            "/team" => Route::Team,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Predict => "/predict",
            Route::Team => "/team",
            Route::NotFound => "/404",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Predict => "Predict",
            Route::Team => "Team",
            Route::NotFound => "Not Found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_routes_round_trip() {
        for route in Route::NAV {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(Route::from_path("/predict/"), Route::Predict);
        assert_eq!(Route::from_path(""), Route::Home);
    }

    #[test]
    fn unknown_paths() {
        assert_eq!(Route::from_path("/admin"), Route::NotFound);
        assert_eq!(Route::from_path("/team/1"), Route::NotFound);
        assert_eq!(Route::from_path("/About"), Route::NotFound);
    }
}
