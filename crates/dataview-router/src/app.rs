// File: src/app.rs
// Purpose: The Dataview application's own route table

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::{Route, RouteError, RouteTable};

/// Page-level views of the application
///
/// The router only carries these as references; the views themselves live in
/// the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    Login,
    Register,
    ConfirmEmail,
    ForgetPassword1,
    ForgetPassword2,
    ForgetPassword3,
    /// Shell with the tab bar; hosts one tab at a time
    MainPage,
    FileUpload,
    Eda,
    Clean,
    Visualize,
}

impl Page {
    pub const ALL: [Page; 11] = [
        Page::Login,
        Page::Register,
        Page::ConfirmEmail,
        Page::ForgetPassword1,
        Page::ForgetPassword2,
        Page::ForgetPassword3,
        Page::MainPage,
        Page::FileUpload,
        Page::Eda,
        Page::Clean,
        Page::Visualize,
    ];

    /// Component name as the frontend knows it
    pub fn component_name(&self) -> &'static str {
        match self {
            Page::Login => "LoginPage",
            Page::Register => "RegisterPage",
            Page::ConfirmEmail => "ConfirmEmail",
            Page::ForgetPassword1 => "ForgetPassword1",
            Page::ForgetPassword2 => "ForgetPassword2",
            Page::ForgetPassword3 => "ForgetPassword3",
            Page::MainPage => "MainPage",
            Page::FileUpload => "FileUploadPage",
            Page::Eda => "EDA",
            Page::Clean => "Clean",
            Page::Visualize => "Visualize",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.component_name())
    }
}

static APP_ROUTES: OnceCell<Arc<RouteTable<Page>>> = OnceCell::new();

/// Declares the application's routes
pub fn app_route_tree() -> Vec<Route<Page>> {
    vec![
        Route::new("/login", Page::Login).with_name("Login"),
        Route::new("/register", Page::Register).with_name("Register"),
        Route::new("/confirmemail", Page::ConfirmEmail).with_name("ConfirmEmail"),
        Route::new("/forgetpassword1", Page::ForgetPassword1).with_name("ForgetPassword1"),
        Route::new("/forgetpassword2", Page::ForgetPassword2).with_name("ForgetPassword2"),
        Route::new("/forgetpassword3", Page::ForgetPassword3).with_name("ForgetPassword3"),
        Route::new("/mainpage", Page::MainPage).with_children([
            Route::new("upload", Page::FileUpload).with_name("FileUpload"),
            Route::new("DataAnalysis/EDA", Page::Eda).with_name("EDA"),
            Route::new("DataAnalysis/Clean/:id?", Page::Clean).with_name("Clean"),
            Route::new("DataAnalysis/Visualize/:id?", Page::Visualize).with_name("Visualize"),
        ]),
    ]
}

/// The process-wide application table, built on first use
///
/// Matching is case-insensitive, as the browser-side router treats paths.
pub fn app_routes() -> Result<Arc<RouteTable<Page>>, RouteError> {
    APP_ROUTES
        .get_or_try_init(|| {
            RouteTable::new(app_route_tree()).map(|table| Arc::new(table.with_case_sensitivity(true)))
        })
        .cloned()
}
