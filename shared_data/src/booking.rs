use crate::{EnquiryDraft, EnquiryErrors, EventType, GuestEstimate, ReferralSource};

// Where the booking form currently is. Only one backward edge exists
// (Contact -> Details); Sent is terminal until a Reset brings everything back
// to the top.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Stage {
	#[default]
	Details,
	Contact,
	Sending,
	Sent
}

// which way the last step navigation went. This only picks the slide
// transition the view plays - it never touches data or validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum NavDirection {
	#[default]
	Forward,
	Backward
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnquiryMsg {
	EventType(EventType),
	EventDate(String),
	Guests(GuestEstimate),
	Name(String),
	Email(String),
	Referral(ReferralSource),
	Details(String),
	Next,
	Back,
	SubmitRequested,
	SubmitSettled,
	Reset
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct BookingForm {
	pub stage: Stage,
	pub draft: EnquiryDraft,
	pub errors: EnquiryErrors,
	pub direction: NavDirection,
	pub in_flight: bool,
	pub completed: bool
}

impl BookingForm {
	// whether a submit request right now would actually go out the door. The
	// in-flight flag is the whole duplicate-submission guard - there's only
	// one logical thread of execution, so no lock is needed.
	#[must_use]
	pub fn submittable(&self) -> bool {
		self.stage == Stage::Contact && !self.in_flight && self.draft.check_contact().is_empty()
	}

	#[must_use]
	pub fn apply(mut self, msg: EnquiryMsg) -> Self {
		match msg {
			EnquiryMsg::EventType(ty) => self.draft.event_type = ty,
			EnquiryMsg::EventDate(date) => self.draft.event_date = date,
			EnquiryMsg::Guests(est) => self.draft.guests = est,
			EnquiryMsg::Name(name) => self.draft.name = name,
			EnquiryMsg::Email(email) => self.draft.email = email,
			EnquiryMsg::Referral(src) => self.draft.referral = src,
			EnquiryMsg::Details(details) => self.draft.details = details,
			EnquiryMsg::Next => if self.stage == Stage::Details {
				self.stage = Stage::Contact;
				self.direction = NavDirection::Forward;
			},
			// going back never loses what was already typed on the contact
			// step - the draft just sits there until the next visit
			EnquiryMsg::Back => if self.stage == Stage::Contact {
				self.stage = Stage::Details;
				self.direction = NavDirection::Backward;
			},
			EnquiryMsg::SubmitRequested => if self.stage == Stage::Contact && !self.in_flight {
				if self.draft.check_contact().is_empty() {
					self.stage = Stage::Sending;
					self.in_flight = true;
				}
				// an invalid submit is a no-op apart from the revalidation
				// below, which makes sure the errors are on screen even if
				// nothing changed since they last appeared
			},
			EnquiryMsg::SubmitSettled => if self.stage == Stage::Sending {
				self.in_flight = false;
				self.completed = true;
				self.stage = Stage::Sent;
			},
			EnquiryMsg::Reset => return Self::default()
		}

		// validation follows every keystroke once the user is on the contact
		// step, so the submit button can be disabled before they ever hit it
		if self.stage == Stage::Contact {
			self.errors = self.draft.check_contact();
		}

		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filled_out() -> BookingForm {
		BookingForm::default()
			.apply(EnquiryMsg::Next)
			.apply(EnquiryMsg::Name("Jane Doe".into()))
			.apply(EnquiryMsg::Email("jane@example.com".into()))
	}

	#[test]
	fn opens_on_the_details_step() {
		let form = BookingForm::default();
		assert_eq!(form.stage, Stage::Details);
		assert!(form.errors.is_empty());
		assert!(!form.in_flight);
		assert!(!form.completed);
	}

	#[test]
	fn invalid_submit_stays_put_and_surfaces_errors() {
		let form = BookingForm::default()
			.apply(EnquiryMsg::Email("abc".into()))
			.apply(EnquiryMsg::Next)
			.apply(EnquiryMsg::SubmitRequested);

		assert_eq!(form.stage, Stage::Contact);
		assert!(!form.in_flight);
		assert!(form.errors.name.is_some());
		assert!(form.errors.email.is_some());
	}

	#[test]
	fn valid_submit_walks_sending_then_sent() {
		let form = filled_out();
		assert!(form.submittable());

		let form = form.apply(EnquiryMsg::SubmitRequested);
		assert_eq!(form.stage, Stage::Sending);
		assert!(form.in_flight);
		assert!(!form.completed);

		let form = form.apply(EnquiryMsg::SubmitSettled);
		assert_eq!(form.stage, Stage::Sent);
		assert!(!form.in_flight);
		assert!(form.completed);
	}

	#[test]
	fn resubmit_while_in_flight_is_a_no_op() {
		let sending = filled_out().apply(EnquiryMsg::SubmitRequested);
		assert!(!sending.submittable());

		let again = sending.clone().apply(EnquiryMsg::SubmitRequested);
		assert_eq!(again, sending);
	}

	#[test]
	fn settle_fires_exactly_once() {
		let sent = filled_out()
			.apply(EnquiryMsg::SubmitRequested)
			.apply(EnquiryMsg::SubmitSettled);

		// a stray second settle (or one arriving outside Sending) changes
		// nothing
		let again = sent.clone().apply(EnquiryMsg::SubmitSettled);
		assert_eq!(again, sent);
	}

	#[test]
	fn reset_returns_to_the_documented_defaults() {
		let form = filled_out()
			.apply(EnquiryMsg::EventDate("2026-09-12".into()))
			.apply(EnquiryMsg::SubmitRequested)
			.apply(EnquiryMsg::SubmitSettled)
			.apply(EnquiryMsg::Reset);

		assert_eq!(form, BookingForm::default());
		assert_eq!(form.draft.event_type, EventType::Wedding);
		assert_eq!(form.draft.guests.label(), "51-100");
		assert_eq!(form.draft.referral.label(), "Search Engine (Google, etc.)");
	}

	#[test]
	fn reset_is_idempotent() {
		// the close path may run the reset twice if the user closes twice in
		// quick succession; that has to be harmless
		let once = filled_out().apply(EnquiryMsg::Reset);
		let twice = once.clone().apply(EnquiryMsg::Reset);
		assert_eq!(once, twice);
	}

	#[test]
	fn going_back_keeps_contact_fields() {
		let form = filled_out()
			.apply(EnquiryMsg::Details("we'd like the booth near the bar".into()))
			.apply(EnquiryMsg::Back);

		assert_eq!(form.stage, Stage::Details);
		assert_eq!(form.direction, NavDirection::Backward);
		assert_eq!(form.draft.name, "Jane Doe");
		assert_eq!(form.draft.email, "jane@example.com");
		assert_eq!(form.draft.details, "we'd like the booth near the bar");

		let form = form.apply(EnquiryMsg::Next);
		assert_eq!(form.direction, NavDirection::Forward);
		assert_eq!(form.draft.name, "Jane Doe");
	}

	#[test]
	fn navigation_is_only_valid_between_the_two_steps() {
		// Back on the first step goes nowhere
		let form = BookingForm::default().apply(EnquiryMsg::Back);
		assert_eq!(form.stage, Stage::Details);

		// Next past the contact step goes nowhere
		let form = filled_out().apply(EnquiryMsg::Next);
		assert_eq!(form.stage, Stage::Contact);

		// and neither does navigation once the enquiry is on its way
		let sending = filled_out().apply(EnquiryMsg::SubmitRequested);
		assert_eq!(sending.clone().apply(EnquiryMsg::Next).stage, Stage::Sending);
		assert_eq!(sending.apply(EnquiryMsg::Back).stage, Stage::Sending);
	}

	#[test]
	fn submit_from_the_details_step_does_nothing() {
		let form = BookingForm::default().apply(EnquiryMsg::SubmitRequested);
		assert_eq!(form.stage, Stage::Details);
		assert!(!form.in_flight);
	}

	#[test]
	fn errors_track_typing_on_the_contact_step() {
		// arriving on the contact step with everything empty already shows
		// the errors, so the submit button starts out disabled
		let form = BookingForm::default().apply(EnquiryMsg::Next);
		assert!(!form.errors.is_empty());
		assert!(!form.submittable());

		let form = form.apply(EnquiryMsg::Name("Jane".into()));
		assert!(form.errors.name.is_none());
		assert!(form.errors.email.is_some());

		let form = form.apply(EnquiryMsg::Email("jane@example".into()));
		assert!(form.errors.email.is_some());

		let form = form.apply(EnquiryMsg::Email("jane@example.com".into()));
		assert!(form.errors.is_empty());
		assert!(form.submittable());
	}
}
