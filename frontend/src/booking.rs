use std::rc::Rc;

use gloo_console::log;
use gloo_events::EventListener;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use shared_data::{
	BookingForm, EnquiryMsg, EnquiryReq, EventType, GuestEstimate, NavDirection, ReferralSource,
	Stage, RELAY_ENDPOINT
};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, KeyboardEvent};
use yew::prelude::*;

// how long the closing transition gets before the form snaps back to its
// defaults. Closing twice inside this window just runs the reset twice,
// which lands on the same state.
const CLOSE_RESET_MS: u32 = 300;

// all the actual form logic lives in shared_data; this wrapper only exists
// so yew's reducer hook has a local type to hang off of
#[derive(PartialEq, Default)]
struct FormState(BookingForm);

impl Reducible for FormState {
	type Action = EnquiryMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		Rc::new(Self(self.0.clone().apply(action)))
	}
}

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
	pub open: bool,
	pub on_close: Callback<()>
}

#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
	let form = use_reducer_eq(FormState::default);

	// hiding is instant (the parent flips `open` off), the reset is not - it
	// waits out the closing transition so the fields don't visibly blank
	// while the dialog is still fading
	let close = {
		let form = form.clone();
		let on_close = props.on_close.clone();
		Callback::from(move |()| {
			on_close.emit(());

			let form = form.clone();
			wasm_bindgen_futures::spawn_local(async move {
				TimeoutFuture::new(CLOSE_RESET_MS).await;
				form.dispatch(EnquiryMsg::Reset);
			});
		})
	};

	// escape dismisses the dialog, and the page shouldn't scroll underneath
	// it while it's up
	{
		let close = close.clone();
		use_effect_with(props.open, move |open| {
			let listener = open.then(|| {
				set_body_scroll_locked(true);

				web_sys::window()
					.and_then(|win| win.document())
					.map(|doc| EventListener::new(&doc, "keydown", move |event| {
						let escape = event.dyn_ref::<KeyboardEvent>()
							.is_some_and(|ev| ev.key() == "Escape");
						if escape {
							close.emit(());
						}
					}))
			}).flatten();

			move || {
				set_body_scroll_locked(false);
				drop(listener);
			}
		});
	}

	if !props.open {
		return html! {};
	}

	macro_rules! typed_callback {
		($msg:ident, $el:ty) => {{
			let form = form.clone();
			Callback::from(move |ev: InputEvent| if let Some(msg) = ev.target()
				.and_then(|t| t.dyn_into::<$el>().ok())
				.map(|el| EnquiryMsg::$msg(el.value())) {
					form.dispatch(msg);
				}
			)
		}}
	}

	macro_rules! choice_callback {
		($msg:ident, $choice:ty) => {{
			let form = form.clone();
			Callback::from(move |ev: Event| if let Some(msg) = ev.target()
				.and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
				.and_then(|sel| <$choice>::from_label(&sel.value()))
				.map(EnquiryMsg::$msg) {
					form.dispatch(msg);
				}
			)
		}}
	}

	let close_click = {
		let close = close.clone();
		Callback::from(move |_: MouseEvent| close.emit(()))
	};

	let submit = {
		let form = form.clone();
		Callback::from(move |ev: SubmitEvent| {
			ev.prevent_default();

			// the reducer enforces the same guard, but checking here too
			// keeps a second request from ever being spawned while one is
			// already in flight
			let fire = form.0.submittable();
			let req = EnquiryReq::from(&form.0.draft);
			form.dispatch(EnquiryMsg::SubmitRequested);

			if !fire {
				return;
			}

			let form = form.clone();
			wasm_bindgen_futures::spawn_local(async move {
				// whatever the relay says (or doesn't), the user gets the
				// confirmation screen - a lost enquiry isn't worth blocking
				// them on, so failures are only worth a log line
				match Request::post(RELAY_ENDPOINT).header("Accept", "application/json").json(&req) {
					Err(err) => log!(format!("enquiry couldn't be serialized: {err:?}")),
					Ok(req) => match req.send().await {
						Err(err) => log!(format!("couldn't reach the relay: {err:?}")),
						Ok(res) if !res.ok() => log!(format!("relay answered {}", res.status())),
						Ok(_) => ()
					}
				}

				form.dispatch(EnquiryMsg::SubmitSettled);
			});
		})
	};

	let slide_class = match form.0.direction {
		NavDirection::Forward => "slide-forward",
		NavDirection::Backward => "slide-backward"
	};

	let progress = match form.0.stage {
		Stage::Details => "0%",
		Stage::Contact | Stage::Sending => "50%",
		Stage::Sent => "100%"
	};

	let body = match form.0.stage {
		Stage::Details => {
			let next_click = {
				let form = form.clone();
				Callback::from(move |_: MouseEvent| form.dispatch(EnquiryMsg::Next))
			};

			html! {
				<div class={ classes!("booking-step", slide_class) }>
					<h3 class="step-title">{ "Step 1: Event Details" }</h3>

					<label for="event-type">{ "Event Type" }</label>
					<select id="event-type" onchange={ choice_callback!(EventType, EventType) }>
						{
							EventType::ALL.iter().map(|ty| html! {
								<option selected={ *ty == form.0.draft.event_type }>{ ty.label() }</option>
							}).collect::<Html>()
						}
					</select>

					<label for="event-date">{ "Event Date" }</label>
					<input
						type="date"
						id="event-date"
						value={ form.0.draft.event_date.clone() }
						onchange={
							let form = form.clone();
							Callback::from(move |ev: Event| if let Some(input) = ev.target()
								.and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
									form.dispatch(EnquiryMsg::EventDate(input.value()));
								}
							)
						}
					/>

					<label for="guests">{ "Estimated Guests" }</label>
					<select id="guests" onchange={ choice_callback!(Guests, GuestEstimate) }>
						{
							GuestEstimate::ALL.iter().map(|est| html! {
								<option selected={ *est == form.0.draft.guests }>{ est.label() }</option>
							}).collect::<Html>()
						}
					</select>

					<button type="button" class="gradient-button booking-advance" onclick={ next_click }>
						{ "Next" }
					</button>
				</div>
			}
		},

		Stage::Contact | Stage::Sending => {
			let back_click = {
				let form = form.clone();
				Callback::from(move |_: MouseEvent| form.dispatch(EnquiryMsg::Back))
			};

			html! {
				<div class={ classes!("booking-step", slide_class) }>
					<h3 class="step-title">{ "Step 2: Your Details" }</h3>

					<label for="name">{ "Your Name" }</label>
					<input
						type="text"
						id="name"
						placeholder="Jane Doe"
						value={ form.0.draft.name.clone() }
						class={ classes!(form.0.errors.name.map(|_| "invalid")) }
						oninput={ typed_callback!(Name, HtmlInputElement) }
					/>
					{ field_error(form.0.errors.name) }

					<label for="email">{ "Your Email" }</label>
					<input
						type="email"
						id="email"
						placeholder="jane.doe@example.com"
						value={ form.0.draft.email.clone() }
						class={ classes!(form.0.errors.email.map(|_| "invalid")) }
						oninput={ typed_callback!(Email, HtmlInputElement) }
					/>
					{ field_error(form.0.errors.email) }

					<label for="referral">{ "How did you hear about us?" }</label>
					<select id="referral" onchange={ choice_callback!(Referral, ReferralSource) }>
						{
							ReferralSource::ALL.iter().map(|src| html! {
								<option selected={ *src == form.0.draft.referral }>{ src.label() }</option>
							}).collect::<Html>()
						}
					</select>

					<label for="details">{ "Additional Details" }</label>
					<textarea
						id="details"
						rows="3"
						placeholder="Venue, special requests, etc."
						value={ form.0.draft.details.clone() }
						oninput={ typed_callback!(Details, HtmlTextAreaElement) }
					/>

					<div class="booking-nav">
						<button type="button" class="plain-button" onclick={ back_click }>
							{ "Back" }
						</button>
						<button
							type="submit"
							class="gradient-button"
							disabled={ form.0.in_flight || !form.0.errors.is_empty() }
						>
							{ if form.0.in_flight { "Sending..." } else { "Submit Enquiry" } }
						</button>
					</div>
				</div>
			}
		},

		Stage::Sent => html! {
			<div class="booking-step booking-sent">
				<div class="sent-badge">{ "✓" }</div>
				<h3>{ "Enquiry Sent!" }</h3>
				<p>{ "We're checking our orbit... You'll hear from us within 24 hours. ✨" }</p>
				<button type="button" class="plain-button booking-advance" onclick={ close_click.clone() }>
					{ "Close" }
				</button>
			</div>
		}
	};

	html! {
		<>
			<style>
			{
				"
				#booking-backdrop {
					position: fixed;
					inset: 0;
					z-index: 50;
					background-color: rgba(0, 0, 0, 0.8);
					backdrop-filter: blur(4px);
					display: flex;
					align-items: center;
					justify-content: center;
					padding: 16px;
					animation: fade-in 0.2s ease-out;
				}
				#booking-dialog {
					position: relative;
					width: 100%;
					max-width: 440px;
					background-color: var(--deep-space);
					border: 1px solid var(--gravity-grey);
					border-radius: 8px;
					overflow: hidden;
					animation: scale-in 0.2s ease-out;
				}
				#booking-dismiss {
					position: absolute;
					top: 12px;
					right: 12px;
					z-index: 10;
					padding: 4px 10px;
					border-radius: 999px;
					background-color: rgba(42, 42, 58, 0.5);
				}
				#booking-progress {
					height: 6px;
					background-color: var(--gravity-grey);
				}
				#booking-progress > div {
					height: 6px;
					background-image: linear-gradient(to right, var(--orbit-pink), var(--orbit-purple), var(--orbit-blue));
					transition: width 0.3s;
				}
				.booking-step {
					display: flex;
					flex-direction: column;
					gap: 6px;
					padding: 32px;
				}
				.booking-step label {
					margin-top: 10px;
					font-size: 14px;
					color: var(--orbit-grey);
				}
				.step-title {
					text-align: center;
					margin: 0 0 10px 0;
				}
				.slide-forward {
					animation: slide-in-right 0.3s ease-out;
				}
				.slide-backward {
					animation: slide-in-left 0.3s ease-out;
				}
				.field-error {
					margin: 2px 0 0 0;
					font-size: 13px;
					color: #f87171;
				}
				input.invalid {
					border-color: #ef4444;
				}
				.booking-nav {
					display: flex;
					gap: 16px;
					margin-top: 16px;
				}
				.booking-nav > button {
					flex: 1;
				}
				.booking-advance {
					margin-top: 16px;
				}
				.booking-sent {
					align-items: center;
					text-align: center;
					padding: 48px 32px;
				}
				.booking-sent > p {
					color: var(--orbit-grey);
				}
				.sent-badge {
					width: 64px;
					height: 64px;
					border-radius: 50%;
					font-size: 36px;
					line-height: 64px;
					background-image: linear-gradient(to bottom right, var(--orbit-pink), var(--orbit-purple), var(--orbit-blue));
					animation: scale-in 0.4s ease-out;
				}
				@keyframes fade-in {
					from { opacity: 0; }
				}
				@keyframes scale-in {
					from { opacity: 0; transform: scale(0.9); }
				}
				@keyframes slide-in-right {
					from { opacity: 0; transform: translateX(30px); }
				}
				@keyframes slide-in-left {
					from { opacity: 0; transform: translateX(-30px); }
				}
				"
			}
			</style>
			<div
				id="booking-backdrop"
				role="dialog"
				aria-modal="true"
				aria-label="Booking Enquiry"
				onclick={ close_click.clone() }
			>
				<div id="booking-dialog" onclick={ Callback::from(|ev: MouseEvent| ev.stop_propagation()) }>
					<button id="booking-dismiss" aria-label="Close booking form" onclick={ close_click }>
						{ "✕" }
					</button>
					<div id="booking-progress">
						<div style={ format!("width: {progress}") } />
					</div>
					<form onsubmit={ submit }>
						{ body }
					</form>
				</div>
			</div>
		</>
	}
}

fn field_error(error: Option<&'static str>) -> Html {
	match error {
		Some(msg) => html! { <p class="field-error">{ msg }</p> },
		None => html! {}
	}
}

fn set_body_scroll_locked(locked: bool) {
	let Some(body) = web_sys::window()
		.and_then(|win| win.document())
		.and_then(|doc| doc.body()) else {
			log!("document has no body to lock scrolling on???");
			return;
		};

	let overflow = if locked { "hidden" } else { "auto" };
	if let Err(e) = body.style().set_property("overflow", overflow) {
		log!("couldn't set body overflow: ", e);
	}
}
