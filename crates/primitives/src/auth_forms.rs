//! Sign in, sign up, verify and forgot-password forms
//!
//! Validation only. Nothing here authenticates anyone; a form that
//! validates is simply handed on.

use std::fmt;
use std::str::FromStr;
use wewin_core::{ConsoleError, FieldSet, FieldSpec, Result, Schema};

const EMAIL: FieldSpec = FieldSpec::email("email", "Email")
    .required("Please enter your email")
    .invalid("Please enter a valid email");

const MOBILE_PHONE: FieldSpec =
    FieldSpec::phone("mobilePhone", "Mobile Phone").required("Please enter your mobile phone");

/// Sign in form
pub static SIGN_IN: Schema = Schema {
    name: "sign in",
    fields: &[
        EMAIL,
        FieldSpec::password("password", "Password")
            .required("Please enter your password")
            .min_len(8, "Password must be at least 8 characters"),
    ],
};

/// Sign up form
pub static SIGN_UP: Schema = Schema {
    name: "sign up",
    fields: &[
        FieldSpec::text("firstName", "First Name").required("Please enter your first name"),
        FieldSpec::text("lastName", "Last Name").required("Please enter your last name"),
        MOBILE_PHONE,
        EMAIL,
        FieldSpec::text("companyName", "Company Name").required("Please enter your company name"),
        FieldSpec::checkbox("terms", "Terms and Conditions")
            .required("You must agree to the terms and conditions"),
    ],
};

/// Account verification form
pub static VERIFY: Schema = Schema {
    name: "verify account",
    fields: &[EMAIL, MOBILE_PHONE],
};

/// Forgot password form
pub static FORGOT_PASSWORD: Schema = Schema {
    name: "forgot password",
    fields: &[EMAIL],
};

/// Which auth form is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AuthView {
    /// Sign in
    #[default]
    SignIn,
    /// Sign up
    SignUp,
    /// Forgot password
    ForgotPassword,
    /// Verify account
    Verify,
}

impl AuthView {
    /// Route segment of the view
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthView::SignIn => "signin",
            AuthView::SignUp => "signup",
            AuthView::ForgotPassword => "forgot-password",
            AuthView::Verify => "verify",
        }
    }

    /// Fields of the view's form
    pub fn schema(&self) -> &'static Schema {
        match self {
            AuthView::SignIn => &SIGN_IN,
            AuthView::SignUp => &SIGN_UP,
            AuthView::ForgotPassword => &FORGOT_PASSWORD,
            AuthView::Verify => &VERIFY,
        }
    }

    /// Validate a submitted form
    pub fn validate(&self, form: &FieldSet) -> Result<()> {
        let result = self.schema().validate(form);
        if let Err(err) = &result {
            tracing::debug!(target: "wewin::session", view = self.as_str(), error = %err, "auth form rejected");
        }
        result
    }
}

impl fmt::Display for AuthView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthView {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "signin" => Ok(AuthView::SignIn),
            "signup" => Ok(AuthView::SignUp),
            "forgot-password" => Ok(AuthView::ForgotPassword),
            "verify" => Ok(AuthView::Verify),
            other => Err(ConsoleError::invalid(
                "view",
                format!("unknown auth view '{}'", other),
            )),
        }
    }
}
