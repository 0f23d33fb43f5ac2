use yew::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::contact_form::ContactForm;
use crate::components::faq::{FaqEntry, FaqList};
use crate::config;
use crate::effects::counter::use_count_up;
use crate::effects::reveal::use_reveal_on_scroll;

const SERVICES: [(&str, &str); 4] = [
    ("Personal Care", "Respectful help with daily routines, hygiene and mobility, at home or out in the community."),
    ("Community Access", "Support to get out, stay connected and take part in the activities that matter to you."),
    ("Supported Living", "Help building the skills and routines for living as independently as you choose."),
    ("Respite", "Short breaks for families and carers, with the same familiar support workers."),
];

const STATS: [(&str, &str); 3] = [
    ("250", "Participants supported"),
    ("40", "Support workers"),
    ("12", "Years of experience"),
];

const TESTIMONIALS: [(&str, &str); 3] = [
    ("The team treats my son like family. He looks forward to every visit.", "Maria, parent"),
    ("I finally get to the footy on weekends again. That means everything.", "Dylan, participant"),
    ("Reliable, kind and always on time. We could not ask for more.", "The Nguyen family"),
];

fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "Are you a registered NDIS provider?",
            answer: "Yes. We work with self-managed, plan-managed and agency-managed participants.",
        },
        FaqEntry {
            question: "How quickly can support start?",
            answer: "Usually within a week of our first conversation, once we have matched you with a support worker.",
        },
        FaqEntry {
            question: "Can I choose my support worker?",
            answer: "Absolutely. We introduce you first, and you can ask for a change at any time.",
        },
        FaqEntry {
            question: "Which areas do you cover?",
            answer: "We currently support participants across the greater metropolitan area and nearby regional towns.",
        },
    ]
}

#[function_component(Landing)]
pub fn landing() -> Html {
    use_reveal_on_scroll();
    use_count_up();

    html! {
        <main class="landing-page">
            <style>
                {r#"
                    .reveal {
                        opacity: 0;
                        transform: translateY(24px);
                        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                    }
                    .reveal.active {
                        opacity: 1;
                        transform: none;
                    }
                    .carousel {
                        overflow: hidden;
                        position: relative;
                    }
                    .carousel-track {
                        display: flex;
                        transition: transform 0.6s ease-in-out;
                    }
                    .carousel-slide {
                        flex: 0 0 100%;
                        padding: 2rem;
                        text-align: center;
                    }
                    .carousel-dot {
                        width: 10px;
                        height: 10px;
                        margin: 0 4px;
                        border: none;
                        border-radius: 50%;
                        background: #ccc;
                    }
                    .carousel-dot.active {
                        background: #0b6b3a;
                    }
                    .faq-answer {
                        display: none;
                    }
                    .faq-item.active .faq-answer {
                        display: block;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        max-width: 520px;
                    }
                "#}
            </style>

            <section id="home" class="hero">
                <div class="hero-content">
                    <h1>{"Support that fits your life"}</h1>
                    <p class="hero-subtitle">
                        {"TenaCare Support Services provides flexible, person-centred disability support across the community."}
                    </p>
                    <a href="#contact" class="btn btn-primary">{"Get in touch"}</a>
                </div>
            </section>

            <section id="services" class="services">
                <h2 class="reveal">{"Our Services"}</h2>
                <div class="service-grid">
                    { for SERVICES.iter().map(|(title, text)| html! {
                        <article class="service-card reveal">
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </article>
                    }) }
                </div>
            </section>

            <section id="about" class="stats">
                { for STATS.iter().map(|(target, label)| html! {
                    <div class="stat reveal">
                        <span class="count" data-target={*target}>{"0"}</span>
                        <span class="stat-label">{*label}</span>
                    </div>
                }) }
            </section>

            <section id="testimonials" class="testimonials">
                <h2 class="reveal">{"What families say"}</h2>
                <Carousel>
                    { for TESTIMONIALS.iter().map(|(quote, author)| html! {
                        <blockquote>
                            <p>{*quote}</p>
                            <cite>{*author}</cite>
                        </blockquote>
                    }) }
                </Carousel>
            </section>

            <section id="faq" class="faq">
                <h2 class="reveal">{"Frequently Asked Questions"}</h2>
                <FaqList entries={faq_entries()} />
            </section>

            <section id="contact" class="contact">
                <h2>{"Contact Us"}</h2>
                <p>{"Tell us a little about what you need and we will get back to you within one business day."}</p>
                <ContactForm live={config::live_contact_form()} />
            </section>
        </main>
    }
}
