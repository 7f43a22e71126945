use yew::prelude::*;

use crate::{faq::FaqItem, style::SharedStyle};

const FAQS: [(&str, &str); 5] = [
	(
		"What's included in a standard rental package?",
		"Our standard package includes 3 hours of booth time, a professional on-site attendant, \
		unlimited video sessions, a custom video overlay, instant social sharing, and a digital \
		gallery of all videos after the event."
	),
	(
		"How much space do you need for the 360° booth?",
		"We recommend a clear, flat area of at least 10x10 feet (3x3 meters) to ensure the safety \
		of your guests and the best video quality. More space is always better!"
	),
	(
		"How long does setup and breakdown take?",
		"Our team typically arrives 60-90 minutes before the scheduled start time for a seamless \
		setup. Breakdown is quicker, usually taking about 45-60 minutes."
	),
	(
		"How do guests receive their videos?",
		"Guests can instantly share their videos via email, text, or QR code right from our \
		sharing station. The event host will also receive a link to a full online gallery of all \
		the videos."
	),
	(
		"Can the video overlay be customized for my event?",
		"Absolutely! We'll work with you to design a custom overlay that matches your event's \
		theme, branding, or color scheme. Just provide us with your logo, text, or design ideas."
	)
];

#[derive(Properties, PartialEq)]
pub struct HomeProps {
	// every call-to-action on the page funnels into the same booking modal
	pub on_enquire: Callback<()>
}

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
	glyph: AttrValue,
	title: AttrValue,
	description: AttrValue
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
	html! {
		<div class="feature-card">
			<div class="feature-glyph">{ &props.glyph }</div>
			<h3>{ &props.title }</h3>
			<p>{ &props.description }</p>
		</div>
	}
}

#[derive(Properties, PartialEq)]
struct EventCardProps {
	image: AttrValue,
	title: AttrValue,
	description: AttrValue
}

#[function_component(EventCard)]
fn event_card(props: &EventCardProps) -> Html {
	html! {
		<div class="event-card">
			<img src={ props.image.clone() } alt={ props.title.clone() } />
			<div class="event-card-text">
				<h3>{ &props.title }</h3>
				<p>{ &props.description }</p>
			</div>
		</div>
	}
}

#[derive(Properties, PartialEq)]
struct BookingStepProps {
	number: u8,
	title: AttrValue,
	description: AttrValue
}

#[function_component(BookingStep)]
fn booking_step(props: &BookingStepProps) -> Html {
	html! {
		<div class="process-step">
			<div class="process-number">{ props.number }</div>
			<h3>{ &props.title }</h3>
			<p>{ &props.description }</p>
		</div>
	}
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
	let enquire_click = {
		let on_enquire = props.on_enquire.clone();
		Callback::from(move |_: MouseEvent| on_enquire.emit(()))
	};

	html! {
		<>
			<SharedStyle />
			<style>
			{
				"
				header {
					position: fixed;
					top: 0;
					left: 0;
					right: 0;
					z-index: 40;
					background-color: rgba(7, 7, 15, 0.85);
					backdrop-filter: blur(4px);
					border-bottom: 1px solid var(--gravity-grey);
				}
				#header-inner {
					max-width: 1100px;
					margin: 0 auto;
					padding: 12px 24px;
					display: flex;
					justify-content: space-between;
					align-items: center;
				}
				#wordmark {
					font-family: Montserrat, Arial, sans-serif;
					font-weight: 800;
					font-size: 20px;
					letter-spacing: 1px;
				}
				nav {
					display: flex;
					align-items: center;
					gap: 24px;
				}
				nav > a {
					font-size: 14px;
					color: var(--orbit-grey);
				}
				nav > a:hover {
					color: var(--starlight);
				}
				section {
					padding: 80px 24px;
				}
				.section-inner {
					max-width: 1100px;
					margin: 0 auto;
				}
				.section-heading {
					text-align: center;
					max-width: 620px;
					margin: 0 auto 48px auto;
				}
				.section-heading > p {
					color: var(--orbit-grey);
				}
				.shaded {
					background-color: rgba(0, 0, 0, 0.5);
				}
				#hero {
					min-height: 100vh;
					display: flex;
					flex-direction: column;
					justify-content: center;
					align-items: center;
					text-align: center;
					background-image: radial-gradient(circle at 50% 30%, rgba(155, 61, 255, 0.25), var(--deep-space) 70%);
				}
				#hero h1 {
					font-size: clamp(40px, 7vw, 72px);
					font-weight: 800;
					line-height: 1.1;
					margin: 0 0 16px 0;
				}
				#hero .accent {
					background-image: linear-gradient(to right, var(--orbit-pink), var(--orbit-purple), var(--orbit-blue));
					background-clip: text;
					-webkit-background-clip: text;
					color: transparent;
				}
				#tagline {
					font-size: 20px;
					letter-spacing: 2px;
					color: var(--orbit-grey);
					margin-bottom: 32px;
				}
				.card-grid {
					display: grid;
					grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
					gap: 32px;
				}
				.feature-card {
					background-color: rgba(42, 42, 58, 0.3);
					border: 1px solid var(--gravity-grey);
					border-radius: 8px;
					padding: 24px;
				}
				.feature-card > p {
					color: var(--orbit-grey);
				}
				.feature-glyph {
					font-size: 28px;
					color: var(--orbit-pink);
				}
				.event-card {
					position: relative;
					border-radius: 8px;
					overflow: hidden;
				}
				.event-card > img {
					width: 100%;
					height: 320px;
					object-fit: cover;
					display: block;
				}
				.event-card-text {
					position: absolute;
					bottom: 0;
					left: 0;
					right: 0;
					padding: 24px;
					background-image: linear-gradient(to top, rgba(0, 0, 0, 0.85), transparent);
				}
				.event-card-text > p {
					color: var(--orbit-grey);
					margin: 4px 0 0 0;
				}
				#gallery-frame {
					max-width: 860px;
					margin: 0 auto;
					border: 1px solid var(--gravity-grey);
					border-radius: 12px;
					overflow: hidden;
					aspect-ratio: 16 / 9;
				}
				#gallery-frame > iframe {
					width: 100%;
					height: 100%;
					border: none;
				}
				#process-row {
					display: flex;
					flex-wrap: wrap;
					justify-content: center;
					gap: 48px;
					text-align: center;
				}
				.process-step {
					max-width: 260px;
				}
				.process-step > p {
					color: var(--orbit-grey);
				}
				.process-number {
					width: 48px;
					height: 48px;
					margin: 0 auto;
					border-radius: 50%;
					line-height: 48px;
					font-weight: bold;
					font-size: 20px;
					background-image: linear-gradient(to bottom right, var(--orbit-pink), var(--orbit-purple), var(--orbit-blue));
				}
				#faq-list {
					max-width: 720px;
					margin: 0 auto;
				}
				.faq-item {
					border-bottom: 1px solid var(--gravity-grey);
					padding: 16px 0;
				}
				.faq-question {
					width: 100%;
					display: flex;
					justify-content: space-between;
					align-items: center;
					background: none;
					border: none;
					border-radius: 0;
					padding: 0;
					text-align: left;
					font-size: 17px;
					font-weight: 600;
				}
				.faq-chevron {
					transition: transform 0.3s;
				}
				.faq-chevron-open {
					transform: rotate(180deg);
				}
				.faq-answer {
					margin: 16px 0 0 0;
					color: var(--orbit-grey);
				}
				#contact .section-heading {
					margin-bottom: 0;
				}
				#phone-line {
					margin-top: 24px;
					color: var(--orbit-grey);
				}
				#phone-line > a {
					font-weight: bold;
					color: var(--starlight);
				}
				footer {
					border-top: 1px solid var(--gravity-grey);
					background-color: rgba(0, 0, 0, 0.4);
					padding: 32px 24px;
				}
				#footer-inner {
					max-width: 1100px;
					margin: 0 auto;
					display: flex;
					flex-wrap: wrap;
					justify-content: space-between;
					gap: 12px;
					font-size: 14px;
					color: var(--orbit-grey);
				}
				#footer-links {
					display: flex;
					gap: 16px;
				}
				#footer-links > a {
					color: var(--orbit-grey);
				}
				#footer-links > a:hover {
					color: var(--starlight);
				}
				"
			}
			</style>

			<header>
				<div id="header-inner">
					<a id="wordmark" href="#hero">{ "Orbit 360 Motion" }</a>
					<nav>
						<a href="#experience">{ "Experience" }</a>
						<a href="#events">{ "Events" }</a>
						<a href="#gallery">{ "Gallery" }</a>
						<a href="#process">{ "Process" }</a>
						<a href="#faq">{ "FAQ" }</a>
						<button class="plain-button" onclick={ enquire_click.clone() }>
							{ "Check Availability" }
						</button>
					</nav>
				</div>
			</header>

			<main>
				<section id="hero">
					<h1>
						{ "Capture Your Event in" }
						<br />
						<span class="accent">{ "Cinematic Motion" }</span>
					</h1>
					<div id="tagline">{ "Where every moment comes full circle." }</div>
					<button class="gradient-button" onclick={ enquire_click.clone() }>
						{ "Check Availability" }
					</button>
				</section>

				<section id="experience" class="shaded">
					<div class="section-inner">
						<div class="section-heading">
							<h2>{ "The Orbit360 Experience" }</h2>
							<p>{ "We blend cutting-edge technology with seamless service for an unforgettable result." }</p>
						</div>
						<div class="card-grid">
							<FeatureCard
								glyph="✦"
								title="Cinematic Mobile Video"
								description="Our system captures stunning, slow-motion video, optimized for social sharing and ready to wow your followers."
							/>
							<FeatureCard
								glyph="⚙"
								title="High-End Equipment"
								description="Featuring a spacious 100cm platform and a Google Pixel 9 Pro camera for crisp, vibrant, and professional-grade footage."
							/>
							<FeatureCard
								glyph="✨"
								title="Flawless On-Site Setup"
								description="Our expert team handles everything from delivery and setup to operation, ensuring a smooth and engaging experience for your guests."
							/>
						</div>
					</div>
				</section>

				<section id="events">
					<div class="section-inner">
						<div class="section-heading">
							<h2>{ "Perfect For Any Occasion" }</h2>
							<p>{ "Elevate your event and create lasting memories that move." }</p>
						</div>
						<div class="card-grid">
							<EventCard
								image="https://images.unsplash.com/photo-1606800052052-a08af7148866?q=80&w=2070&auto=format&fit=crop"
								title="Weddings"
								description="Capture the magic of your special day from every angle."
							/>
							<EventCard
								image="https://images.unsplash.com/photo-1528605248644-14dd04022da1?q=80&w=2070&auto=format&fit=crop"
								title="Corporate & Branding"
								description="Create dynamic content and boost your brand's social presence."
							/>
							<EventCard
								image="https://images.unsplash.com/photo-1517457373958-b7bdd4587205?q=80&w=2069&auto=format&fit=crop"
								title="Nightlife & Socials"
								description="Bring the ultimate party centerpiece that gets everyone talking."
							/>
						</div>
					</div>
				</section>

				<section id="gallery" class="shaded">
					<div class="section-inner">
						<div class="section-heading">
							<h2>{ "Moments in Motion" }</h2>
							<p>{ "See the fun, energy, and unforgettable moments captured by our 360° booth." }</p>
						</div>
						<div id="gallery-frame">
							<iframe
								src="https://www.youtube.com/embed/videoseries?si=tN7p-_cM_DsYCaYo&list=PLe1uGkO3QZS1FaKgtCpQnWny5bdfaTg7b"
								title="YouTube video player"
								allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
								allowfullscreen={true}
							/>
						</div>
					</div>
				</section>

				<section id="process">
					<div class="section-inner">
						<div class="section-heading">
							<h2>{ "Simple 3-Step Booking" }</h2>
							<p>{ "Securing the ultimate video booth experience is quick and easy." }</p>
						</div>
						<div id="process-row">
							<BookingStep
								number={ 1 }
								title="Enquire"
								description="Fill out our quick form with your event details. We'll check availability and get back to you fast."
							/>
							<BookingStep
								number={ 2 }
								title="Confirm"
								description="Review your custom quote, confirm your package, and secure your date with a simple deposit."
							/>
							<BookingStep
								number={ 3 }
								title="Experience"
								description="We arrive, set up, and deliver an incredible 360° video experience for you and your guests. Enjoy!"
							/>
						</div>
					</div>
				</section>

				<section id="faq" class="shaded">
					<div class="section-inner">
						<div class="section-heading">
							<h2>{ "Frequently Asked Questions" }</h2>
							<p>{ "Have questions? We've got answers. Here are some of the most common things we get asked." }</p>
						</div>
						<div id="faq-list">
							{
								FAQS.iter().map(|(question, answer)| html! {
									<FaqItem question={ *question } answer={ *answer } />
								}).collect::<Html>()
							}
						</div>
					</div>
				</section>

				<section id="contact">
					<div class="section-inner">
						<div class="section-heading">
							<h2>{ "Ready to Elevate Your Event?" }</h2>
							<p>{ "Let's make your event unforgettable. Check availability and get your custom quote now." }</p>
							<br />
							<button class="gradient-button" onclick={ enquire_click }>
								{ "Check Availability & Pricing" }
							</button>
							<p id="phone-line">
								{ "Or call us directly: " }
								<a href="tel:07511286975">{ shared_data::CONTACT_PHONE }</a>
							</p>
						</div>
					</div>
				</section>
			</main>

			<footer>
				<div id="footer-inner">
					<span>{ "© 2026 Orbit360 Motion. All Rights Reserved." }</span>
					<div id="footer-links">
						<a href="tel:07511286975">{ shared_data::CONTACT_PHONE }</a>
						<a href={ format!("mailto:{}", shared_data::CONTACT_EMAIL) }>{ shared_data::CONTACT_EMAIL }</a>
						<a href="https://www.facebook.com/profile.php?id=61583879221656" target="_blank" rel="noopener noreferrer">{ "Facebook" }</a>
						<a href="https://www.instagram.com/orbit360motion/" target="_blank" rel="noopener noreferrer">{ "Instagram" }</a>
						<a href="https://www.youtube.com/@Orbit360Motion" target="_blank" rel="noopener noreferrer">{ "YouTube" }</a>
					</div>
				</div>
			</footer>
		</>
	}
}
