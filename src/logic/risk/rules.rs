//! Breakage-Risk Tables
//!
//! Ordered reason -> domain lists. Entries may contain a single `*`
//! wildcard ("any characters"), matched against the hostname after
//! wildcard-to-regex translation. Plain entries use the same
//! equality/suffix/substring rule as the intent classifier.

// ============================================================================
// RISK TABLE (ordered, first match wins)
// ============================================================================

pub const RISK_DOMAINS: &[(&str, &[&str])] = &[
    (
        "payment",
        &[
            "js.stripe.com",
            "checkout.stripe.com",
            "*.paypal.com",
            "paypalobjects.com",
            "braintreegateway.com",
            "*.adyen.com",
            "pay.google.com",
        ],
    ),
    (
        "auth",
        &[
            "accounts.google.com",
            "*.auth0.com",
            "*.okta.com",
            "login.microsoftonline.com",
            "appleid.apple.com",
            "*.firebaseapp.com",
        ],
    ),
    (
        "fonts",
        &[
            "fonts.googleapis.com",
            "fonts.gstatic.com",
            "use.typekit.net",
            "*.fontawesome.com",
        ],
    ),
    (
        "app-analytics",
        &[
            "*.sentry.io",
            "browser.sentry-cdn.com",
            "*.bugsnag.com",
            "*.newrelic.com",
            "rollbar.com",
        ],
    ),
    (
        "essential-cdn",
        &[
            "ajax.googleapis.com",
            "cdnjs.cloudflare.com",
            "*.jsdelivr.net",
            "unpkg.com",
            "polyfill.io",
        ],
    ),
];
