mod booking;
pub use booking::{BookingForm, EnquiryMsg, NavDirection, Stage};

// formsubmit's /ajax/ endpoint answers with json instead of a redirect, which
// is what a fetch-style client wants. The enquiry lands in the inbox named in
// the path.
pub const RELAY_ENDPOINT: &str = "https://formsubmit.co/ajax/info@orbit360motion.co.uk";
pub const ENQUIRY_CC: &str = "orbit360motion@gmail.com";

pub const CONTACT_PHONE: &str = "07511 286 975";
pub const CONTACT_EMAIL: &str = "info@orbit360motion.co.uk";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum EventType {
	#[default]
	Wedding,
	Corporate,
	Nightlife,
	Other
}

impl EventType {
	pub const ALL: [Self; 4] = [Self::Wedding, Self::Corporate, Self::Nightlife, Self::Other];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Wedding => "Wedding",
			Self::Corporate => "Corporate & Branding",
			Self::Nightlife => "Nightlife & Social",
			Self::Other => "Other"
		}
	}

	// the <select> hands values back as the option text, so this has to
	// round-trip with label()
	#[must_use]
	pub fn from_label(label: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|ty| ty.label() == label)
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum GuestEstimate {
	UpTo50,
	#[default]
	UpTo100,
	UpTo200,
	Over200
}

impl GuestEstimate {
	pub const ALL: [Self; 4] = [Self::UpTo50, Self::UpTo100, Self::UpTo200, Self::Over200];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::UpTo50 => "0-50",
			Self::UpTo100 => "51-100",
			Self::UpTo200 => "101-200",
			Self::Over200 => "200+"
		}
	}

	#[must_use]
	pub fn from_label(label: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|est| est.label() == label)
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ReferralSource {
	#[default]
	SearchEngine,
	SocialMedia,
	Friend,
	SawUsAtAnEvent,
	Other
}

impl ReferralSource {
	pub const ALL: [Self; 5] = [
		Self::SearchEngine,
		Self::SocialMedia,
		Self::Friend,
		Self::SawUsAtAnEvent,
		Self::Other
	];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::SearchEngine => "Search Engine (Google, etc.)",
			Self::SocialMedia => "Social Media (Instagram, Facebook, etc.)",
			Self::Friend => "Referral from a friend",
			Self::SawUsAtAnEvent => "Saw us at an event",
			Self::Other => "Other"
		}
	}

	#[must_use]
	pub fn from_label(label: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|src| src.label() == label)
	}
}

// the single in-flight enquiry. There's no identity and no persistence - it
// lives as long as the booking form is open and goes back to defaults when
// the form closes.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct EnquiryDraft {
	pub event_type: EventType,
	pub event_date: String,
	pub guests: GuestEstimate,
	pub name: String,
	pub email: String,
	pub referral: ReferralSource,
	pub details: String
}

impl EnquiryDraft {
	// name and email are the only fields that can actually be wrong; every
	// step-1 field has a default and can never be emptied
	#[must_use]
	pub fn check_contact(&self) -> EnquiryErrors {
		EnquiryErrors {
			name: self.name.trim().is_empty().then_some("Your name is required."),
			email: if self.email.trim().is_empty() {
				Some("Your email is required.")
			} else if email_looks_valid(&self.email) {
				None
			} else {
				Some("Please enter a valid email address.")
			}
		}
	}
}

// a field that's absent here is valid. Messages are the user-facing copy,
// rendered under the offending input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct EnquiryErrors {
	pub name: Option<&'static str>,
	pub email: Option<&'static str>
}

impl EnquiryErrors {
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.name.is_none() && self.email.is_none()
	}
}

// something, an @, then a domain with at least one dot - and no whitespace or
// second @ anywhere in between. Deliberately loose; the relay does its own
// verification when it mails the reply-to.
fn email_looks_valid(email: &str) -> bool {
	let Some((local, domain)) = email.split_once('@') else {
		return false;
	};
	let Some((host, tld)) = domain.rsplit_once('.') else {
		return false;
	};

	[local, host, tld].iter().all(|part|
		!part.is_empty() && !part.chars().any(|ch| ch.is_whitespace() || ch == '@')
	)
}

// The field names are the wire contract with formsubmit - the receiver keys
// off the exact spellings (and lowercase `email` is what it uses for its
// auto-reply-to), so each one is pinned with a rename instead of a
// rename_all rule.
#[derive(serde::Serialize, Clone, Debug)]
pub struct EnquiryReq {
	#[serde(rename = "Event Type")]
	pub event_type: &'static str,
	#[serde(rename = "Event Date")]
	pub event_date: String,
	#[serde(rename = "Estimated Guests")]
	pub estimated_guests: &'static str,
	#[serde(rename = "Name")]
	pub name: String,
	pub email: String,
	#[serde(rename = "How did you hear about us?")]
	pub referral_source: &'static str,
	#[serde(rename = "Additional Details")]
	pub details: String,
	#[serde(rename = "_subject")]
	pub subject: String,
	#[serde(rename = "_cc")]
	pub cc: &'static str,
	#[serde(rename = "_template")]
	pub template: &'static str,
	#[serde(rename = "_captcha")]
	pub captcha: &'static str
}

impl From<&EnquiryDraft> for EnquiryReq {
	fn from(draft: &EnquiryDraft) -> Self {
		let date = if draft.event_date.is_empty() {
			"Not specified"
		} else {
			draft.event_date.as_str()
		};

		Self {
			event_type: draft.event_type.label(),
			event_date: draft.event_date.clone(),
			estimated_guests: draft.guests.label(),
			name: draft.name.clone(),
			email: draft.email.clone(),
			referral_source: draft.referral.label(),
			details: draft.details.clone(),
			subject: format!("Orbit360 Motion Enquiry: {} on {date}", draft.event_type.label()),
			cc: ENQUIRY_CC,
			template: "table",
			captcha: "false"
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn email_pattern_acceptance() {
		assert!(email_looks_valid("a@b.co"));
		assert!(email_looks_valid("a.b@c.com"));
		assert!(email_looks_valid("jane.doe+rsvp@mail.example.co.uk"));

		assert!(!email_looks_valid("a@b"));
		assert!(!email_looks_valid("@b.com"));
		assert!(!email_looks_valid("a@"));
		assert!(!email_looks_valid("a@b."));
		assert!(!email_looks_valid("a@@b.com"));
		assert!(!email_looks_valid("a b@c.com"));
		assert!(!email_looks_valid("a@b c.com"));
	}

	#[test]
	fn validation_trims_name_but_not_email_pattern() {
		let mut draft = EnquiryDraft {
			name: "   ".into(),
			email: " a@b.co".into(),
			..EnquiryDraft::default()
		};

		let errs = draft.check_contact();
		assert!(errs.name.is_some());
		// whitespace anywhere in the address fails the pattern, so a padded
		// email is not quietly accepted
		assert!(errs.email.is_some());

		draft.name = " Jane Doe ".into();
		draft.email = "jane@example.com".into();
		assert!(draft.check_contact().is_empty());
	}

	#[test]
	fn empty_fields_get_their_own_messages() {
		let draft = EnquiryDraft::default();
		let errs = draft.check_contact();
		assert_eq!(errs.name, Some("Your name is required."));
		assert_eq!(errs.email, Some("Your email is required."));

		let draft = EnquiryDraft { email: "abc".into(), ..draft };
		assert_eq!(draft.check_contact().email, Some("Please enter a valid email address."));
	}

	#[test]
	fn draft_defaults_match_the_form() {
		let draft = EnquiryDraft::default();
		assert_eq!(draft.event_type.label(), "Wedding");
		assert_eq!(draft.guests.label(), "51-100");
		assert_eq!(draft.referral.label(), "Search Engine (Google, etc.)");
		assert!(draft.event_date.is_empty());
		assert!(draft.name.is_empty());
		assert!(draft.email.is_empty());
		assert!(draft.details.is_empty());
	}

	#[test]
	fn labels_round_trip() {
		for ty in EventType::ALL {
			assert_eq!(EventType::from_label(ty.label()), Some(ty));
		}
		for est in GuestEstimate::ALL {
			assert_eq!(GuestEstimate::from_label(est.label()), Some(est));
		}
		for src in ReferralSource::ALL {
			assert_eq!(ReferralSource::from_label(src.label()), Some(src));
		}

		assert_eq!(EventType::from_label("Birthday"), None);
	}

	#[test]
	fn wire_payload_uses_the_relay_key_spellings() {
		let draft = EnquiryDraft {
			event_date: "2026-09-12".into(),
			name: "Jane Doe".into(),
			email: "jane@example.com".into(),
			details: "Venue has a mezzanine".into(),
			..EnquiryDraft::default()
		};

		let value = serde_json::to_value(EnquiryReq::from(&draft)).unwrap();
		let obj = value.as_object().unwrap();

		for key in [
			"Event Type",
			"Event Date",
			"Estimated Guests",
			"Name",
			"email",
			"How did you hear about us?",
			"Additional Details",
			"_subject",
			"_cc",
			"_template",
			"_captcha"
		] {
			assert!(obj.contains_key(key), "missing wire key {key:?}");
		}
		assert_eq!(obj.len(), 11);

		assert_eq!(obj["Name"], "Jane Doe");
		assert_eq!(obj["email"], "jane@example.com");
		assert_eq!(obj["_subject"], "Orbit360 Motion Enquiry: Wedding on 2026-09-12");
		assert_eq!(obj["_cc"], ENQUIRY_CC);
		assert_eq!(obj["_template"], "table");
		assert_eq!(obj["_captcha"], "false");
	}

	#[test]
	fn subject_falls_back_when_no_date_was_given() {
		let req = EnquiryReq::from(&EnquiryDraft {
			event_type: EventType::Nightlife,
			..EnquiryDraft::default()
		});

		assert_eq!(req.subject, "Orbit360 Motion Enquiry: Nightlife & Social on Not specified");
		// the body field stays empty though - only the subject gets the
		// placeholder
		assert_eq!(req.event_date, "");
	}
}
