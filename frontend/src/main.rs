use yew::prelude::*;
use booking::BookingModal;
use home::Home;

mod booking;
mod faq;
mod home;
mod style;

// The whole site is one page; the only state that lives up here is whether
// the booking modal is showing. The modal stays mounted while hidden so its
// close contract (hide now, reset the draft after the transition) holds.
#[function_component(App)]
pub fn app() -> Html {
	let booking_open = use_state(|| false);

	let open_booking = {
		let booking_open = booking_open.clone();
		Callback::from(move |()| booking_open.set(true))
	};

	let close_booking = {
		let booking_open = booking_open.clone();
		Callback::from(move |()| booking_open.set(false))
	};

	html! {
		<>
			<Home on_enquire={ open_booking } />
			<BookingModal open={ *booking_open } on_close={ close_booking } />
		</>
	}
}

fn main() {
	yew::Renderer::<App>::new().render();
}
