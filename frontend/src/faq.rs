use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
	pub question: AttrValue,
	pub answer: AttrValue
}

// each item folds and unfolds on its own - there's no accordion-wide state,
// so any number of answers can be open at once
#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
	let open = use_state(|| false);

	let toggle = {
		let open = open.clone();
		Callback::from(move |_: MouseEvent| open.set(!*open))
	};

	html! {
		<div class="faq-item">
			<button class="faq-question" onclick={ toggle } aria-expanded={ open.to_string() }>
				<span>{ &props.question }</span>
				<span class={ classes!("faq-chevron", open.then_some("faq-chevron-open")) }>
					{ "⌄" }
				</span>
			</button>
			{
				if *open {
					html! { <p class="faq-answer">{ &props.answer }</p> }
				} else {
					html! {}
				}
			}
		</div>
	}
}
