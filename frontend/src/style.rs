use yew::prelude::*;

// the whole palette lives in css custom properties so section styles can
// reach for the same handful of colors the brand uses everywhere
static BASE_STYLE: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Montserrat:wght@700;800&display=swap');
* {
	--deep-space: #07070f;
	--starlight: #f5f6fa;
	--orbit-pink: #ff4d9d;
	--orbit-purple: #9b3dff;
	--orbit-blue: #3d7bff;
	--orbit-grey: #9ca3af;
	--gravity-grey: #2a2a3a;
	box-sizing: border-box;
	color: var(--starlight);
	font-family: Arial, sans-serif;
}
body {
	margin: 0;
	background-color: var(--deep-space);
}
h1, h2, h3 {
	font-family: Montserrat, Arial, sans-serif;
}
a {
	text-decoration: none;
}
input, select, textarea {
	width: 100%;
	background-color: rgba(42, 42, 58, 0.3);
	border: 1px solid var(--gravity-grey);
	border-radius: 6px;
	padding: 12px 16px;
	font-size: 15px;
}
input:focus, select:focus, textarea:focus {
	outline: 2px solid var(--orbit-blue);
}
button {
	border: none;
	border-radius: 999px;
	padding: 12px 32px;
	font-weight: bold;
	font-size: 15px;
	cursor: pointer;
}
button:disabled {
	opacity: 0.5;
	cursor: not-allowed;
}
.gradient-button {
	background-image: linear-gradient(to right, var(--orbit-pink), var(--orbit-purple), var(--orbit-blue));
}
.plain-button {
	background-color: rgba(42, 42, 58, 0.5);
	border: 1px solid var(--gravity-grey);
}
.plain-button:hover {
	background-color: rgba(42, 42, 58, 0.8);
}
"#;

#[function_component(SharedStyle)]
pub fn shared_style() -> Html {
	html! { <style>{ BASE_STYLE }</style> }
}
