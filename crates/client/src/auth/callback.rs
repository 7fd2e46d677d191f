//! Deep-link authentication callback resolution.
//!
//! A callback payload arrives either through router query parameters or as a
//! raw deep-link URL (query- or fragment-encoded). Resolution itself is a
//! pure dispatch over the recognized parameter combinations; the component
//! in `views::auth_callback` owns the side effects (session writes,
//! navigation, the delayed error redirect).

use dioxus::prelude::*;
use dioxus::router::FromQuery;
use monolite_shared::OtpType;

/// Parameters delivered by an authentication redirect.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallbackPayload {
    pub token_hash: Option<String>,
    /// The raw `type` parameter; mapped to [`OtpType`] on the verify path.
    pub otp_type: Option<String>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
    pub redirect_to: Option<String>,
}

impl CallbackPayload {
    /// Build a payload from key/value pairs. Empty values count as absent.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut payload = Self::default();
        for (key, value) in pairs {
            let value = value.into();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "token_hash" => payload.token_hash = Some(value),
                "type" => payload.otp_type = Some(value),
                "access_token" => payload.access_token = Some(value),
                "refresh_token" => payload.refresh_token = Some(value),
                "error" => payload.error = Some(value),
                "error_description" => payload.error_description = Some(value),
                "redirect_to" => payload.redirect_to = Some(value),
                _ => {}
            }
        }
        payload
    }

    /// Parse a raw callback URL. Both the query string and the fragment may
    /// carry parameters; fragment values win when a key appears in both.
    pub fn from_url(raw: &str) -> Self {
        let Ok(parsed) = url::Url::parse(raw) else {
            return Self::default();
        };

        let mut pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        if let Some(fragment) = parsed.fragment() {
            pairs.extend(
                url::form_urlencoded::parse(fragment.as_bytes())
                    .map(|(k, v)| (k.into_owned(), v.into_owned())),
            );
        }

        Self::from_pairs(pairs)
    }

    /// Whether the payload carries anything the resolver can act on.
    pub fn is_actionable(&self) -> bool {
        self.error.is_some() || self.access_token.is_some() || self.token_hash.is_some()
    }
}

/// Where the user lands after a successful callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    EmailConfirmed,
    UpdatePassword,
    Home,
}

impl Destination {
    /// Branch on the raw `type` parameter (direct token-pair callbacks).
    pub fn for_raw_type(raw: Option<&str>) -> Self {
        match raw {
            Some("signup") | Some("email") => Self::EmailConfirmed,
            Some("recovery") => Self::UpdatePassword,
            _ => Self::Home,
        }
    }

    /// Branch on the mapped OTP type (token-hash callbacks).
    pub fn for_otp_type(otp_type: OtpType) -> Self {
        match otp_type {
            OtpType::Signup => Self::EmailConfirmed,
            OtpType::Recovery => Self::UpdatePassword,
            OtpType::Magiclink | OtpType::EmailChange => Self::Home,
        }
    }
}

/// The action the session layer must take for a payload.
#[derive(Debug, Clone, PartialEq)]
pub enum CallbackAction {
    /// The backend reported a failure in the redirect itself.
    SurfaceError { message: String },
    /// A full token pair arrived; apply it as the session directly.
    EstablishSession {
        access_token: String,
        refresh_token: String,
        destination: Destination,
    },
    /// A one-time token hash arrived; exchange it for a session.
    VerifyOtp {
        token_hash: String,
        otp_type: OtpType,
        destination: Destination,
    },
    /// Nothing recognizable; route to sign-in.
    Absent,
}

/// Dispatch a callback payload, in priority order: redirect errors first,
/// then a direct token pair, then a one-time token hash.
pub fn resolve(payload: &CallbackPayload) -> CallbackAction {
    if let Some(error) = &payload.error {
        let message = payload
            .error_description
            .clone()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| error.clone());
        return CallbackAction::SurfaceError { message };
    }

    if let (Some(access), Some(refresh)) = (&payload.access_token, &payload.refresh_token) {
        return CallbackAction::EstablishSession {
            access_token: access.clone(),
            refresh_token: refresh.clone(),
            destination: Destination::for_raw_type(payload.otp_type.as_deref()),
        };
    }

    if let (Some(token_hash), Some(raw)) = (&payload.token_hash, &payload.otp_type) {
        let otp_type = OtpType::parse(raw);
        return CallbackAction::VerifyOtp {
            token_hash: token_hash.clone(),
            otp_type,
            destination: Destination::for_otp_type(otp_type),
        };
    }

    CallbackAction::Absent
}

/// Single-execution guard for callback resolution.
///
/// Trigger events can fire more than once for one mounted callback view
/// (route param change, cold-start URL, live URL event); only the first
/// transition wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallbackState {
    #[default]
    Unprocessed,
    Processed,
}

impl CallbackState {
    /// Transition to `Processed`. Returns `true` exactly once.
    pub fn try_begin(&mut self) -> bool {
        match self {
            Self::Unprocessed => {
                *self = Self::Processed;
                true
            }
            Self::Processed => false,
        }
    }
}

/// Query parameters accepted by the auth callback route.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CallbackQuery(pub CallbackPayload);

impl FromQuery for CallbackQuery {
    fn from_query(query: &str) -> Self {
        Self(CallbackPayload::from_pairs(
            url::form_urlencoded::parse(query.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned())),
        ))
    }
}

impl std::fmt::Display for CallbackQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        let fields = [
            ("token_hash", &self.0.token_hash),
            ("type", &self.0.otp_type),
            ("access_token", &self.0.access_token),
            ("refresh_token", &self.0.refresh_token),
            ("error", &self.0.error),
            ("error_description", &self.0.error_description),
            ("redirect_to", &self.0.redirect_to),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                serializer.append_pair(key, value);
            }
        }
        write!(f, "{}", serializer.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair_payload(pairs: &[(&str, &str)]) -> CallbackPayload {
        CallbackPayload::from_pairs(pairs.iter().map(|(k, v)| (*k, v.to_string())))
    }

    #[test]
    fn token_pair_with_recovery_routes_to_update_password() {
        let payload = pair_payload(&[
            ("access_token", "at"),
            ("refresh_token", "rt"),
            ("type", "recovery"),
        ]);
        assert_eq!(
            resolve(&payload),
            CallbackAction::EstablishSession {
                access_token: "at".to_string(),
                refresh_token: "rt".to_string(),
                destination: Destination::UpdatePassword,
            }
        );
    }

    #[test]
    fn signup_and_email_types_route_to_email_confirmed() {
        for raw in ["signup", "email"] {
            let payload = pair_payload(&[
                ("access_token", "at"),
                ("refresh_token", "rt"),
                ("type", raw),
            ]);
            match resolve(&payload) {
                CallbackAction::EstablishSession { destination, .. } => {
                    assert_eq!(destination, Destination::EmailConfirmed)
                }
                other => panic!("unexpected action: {other:?}"),
            }
        }
    }

    #[test]
    fn token_pair_without_type_routes_home() {
        let payload = pair_payload(&[("access_token", "at"), ("refresh_token", "rt")]);
        match resolve(&payload) {
            CallbackAction::EstablishSession { destination, .. } => {
                assert_eq!(destination, Destination::Home)
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn error_wins_over_token_material() {
        let payload = pair_payload(&[
            ("error", "access_denied"),
            ("error_description", "Email link is invalid or has expired"),
            ("access_token", "at"),
            ("refresh_token", "rt"),
            ("token_hash", "th"),
            ("type", "recovery"),
        ]);
        assert_eq!(
            resolve(&payload),
            CallbackAction::SurfaceError {
                message: "Email link is invalid or has expired".to_string(),
            }
        );
    }

    #[test]
    fn error_without_description_surfaces_the_code() {
        let payload = pair_payload(&[("error", "otp_expired")]);
        assert_eq!(
            resolve(&payload),
            CallbackAction::SurfaceError {
                message: "otp_expired".to_string(),
            }
        );
    }

    #[test]
    fn token_hash_path_maps_the_type() {
        let payload = pair_payload(&[("token_hash", "th"), ("type", "recovery")]);
        assert_eq!(
            resolve(&payload),
            CallbackAction::VerifyOtp {
                token_hash: "th".to_string(),
                otp_type: monolite_shared::OtpType::Recovery,
                destination: Destination::UpdatePassword,
            }
        );
    }

    #[test]
    fn unrecognized_type_defaults_to_signup_handling() {
        let payload = pair_payload(&[("token_hash", "th"), ("type", "invite")]);
        match resolve(&payload) {
            CallbackAction::VerifyOtp {
                otp_type,
                destination,
                ..
            } => {
                assert_eq!(otp_type, monolite_shared::OtpType::Signup);
                assert_eq!(destination, Destination::EmailConfirmed);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn magiclink_verification_routes_home() {
        let payload = pair_payload(&[("token_hash", "th"), ("type", "magiclink")]);
        match resolve(&payload) {
            CallbackAction::VerifyOtp { destination, .. } => {
                assert_eq!(destination, Destination::Home)
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn token_hash_without_type_is_absent() {
        let payload = pair_payload(&[("token_hash", "th")]);
        assert_eq!(resolve(&payload), CallbackAction::Absent);
    }

    #[test]
    fn empty_payload_is_absent() {
        assert_eq!(resolve(&CallbackPayload::default()), CallbackAction::Absent);
        assert!(!CallbackPayload::default().is_actionable());
    }

    #[test]
    fn from_url_reads_query_parameters() {
        let payload = CallbackPayload::from_url(
            "monolite-hr://auth/callback?token_hash=th&type=recovery&redirect_to=%2Fhome",
        );
        assert_eq!(payload.token_hash.as_deref(), Some("th"));
        assert_eq!(payload.otp_type.as_deref(), Some("recovery"));
        assert_eq!(payload.redirect_to.as_deref(), Some("/home"));
    }

    #[test]
    fn from_url_reads_fragment_parameters() {
        let payload = CallbackPayload::from_url(
            "https://app.example.test/auth/callback#access_token=at&refresh_token=rt&type=signup",
        );
        assert_eq!(payload.access_token.as_deref(), Some("at"));
        assert_eq!(payload.refresh_token.as_deref(), Some("rt"));
        assert_eq!(payload.otp_type.as_deref(), Some("signup"));
    }

    #[test]
    fn fragment_values_override_query_values() {
        let payload = CallbackPayload::from_url(
            "https://app.example.test/auth/callback?type=signup#type=recovery&access_token=at&refresh_token=rt",
        );
        assert_eq!(payload.otp_type.as_deref(), Some("recovery"));
    }

    #[test]
    fn empty_parameter_values_count_as_absent() {
        let payload =
            CallbackPayload::from_url("https://app.example.test/auth/callback?access_token=&error=");
        assert!(!payload.is_actionable());
    }

    #[test]
    fn unparseable_urls_yield_an_empty_payload() {
        assert_eq!(
            CallbackPayload::from_url("not a url"),
            CallbackPayload::default()
        );
    }

    #[test]
    fn processed_guard_admits_exactly_one_execution() {
        let mut state = CallbackState::default();
        assert!(state.try_begin());
        assert!(!state.try_begin());
        assert!(!state.try_begin());
        assert_eq!(state, CallbackState::Processed);
    }

    #[test]
    fn callback_query_round_trips_through_display() {
        let query = CallbackQuery(pair_payload(&[
            ("token_hash", "th"),
            ("type", "recovery"),
        ]));
        let rendered = query.to_string();
        let parsed = CallbackQuery::from_query(&rendered);
        assert_eq!(parsed, query);
    }
}
