//! Landing page component
//!
//! Single-page marketing site for EduLaunch:
//! - SEO meta tags
//! - Fixed navbar with mobile menu and active-section highlighting
//! - Hero, about, services, pricing, webinar registration and contact sections,
//!   each form with its own inline feedback
//! - Entrance animations for sections and cards

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::SiteSettings;
use crate::ui::anchor::{AnchorLink, NavLink};
use crate::ui::contact_form::ContactMessageForm;
use crate::ui::icon::{Icon, icons};
use crate::ui::menu::MenuToggle;
use crate::ui::reveal::{EntranceAnimator, apply_card_hover};
use crate::ui::scroll_tracker::use_scroll_tracker;
use crate::ui::webinar_form::WebinarRegistrationForm;

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <Navbar />

        <main>
            <HeroSection />
            <AboutSection />
            <ServicesSection />
            <PricingSection />
            <WebinarSection />
            <ContactSection />
        </main>

        <Footer />

        <LandingStyles />
        <EntranceAnimator />
    }
}

/// Fixed navigation bar
#[component]
fn Navbar() -> impl IntoView {
    let tracker = use_scroll_tracker();

    view! {
        <nav class="navbar" class:scrolled=move || tracker.scrolled.get()>
            <div class="nav-container">
                <AnchorLink href="#home" class="logo">
                    <Icon name=icons::ACADEMIC class="icon-lg" />
                    <span>"EduLaunch"</span>
                </AnchorLink>

                <ul class="nav-links">
                    <NavLink href="#home" label="Home" />
                    <NavLink href="#about" label="About" />
                    <NavLink href="#services" label="Services" />
                    <NavLink href="#pricing" label="Pricing" />
                    <NavLink href="#webinar" label="Webinar" />
                    <NavLink href="#contact" label="Contact" />
                </ul>

                <MenuToggle />
            </div>
        </nav>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="container hero-content">
                <h1>"Bring every classroom online in a week"</h1>
                <p class="hero-subtitle">
                    "EduLaunch gives schools a ready-made digital campus: timetables, parent updates and live lessons in one place."
                </p>
                <div class="hero-actions">
                    <AnchorLink href="#webinar" class="btn btn-primary">
                        "Join the free webinar"
                    </AnchorLink>
                    <AnchorLink href="#pricing" class="btn btn-secondary">
                        "See pricing"
                    </AnchorLink>
                </div>
                <AnchorLink href="#about" class="scroll-indicator">
                    <Icon name=icons::CHEVRON_DOWN class="icon-lg" />
                </AnchorLink>
            </div>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container">
                <h2 class="section-title">"Built with teachers, for schools"</h2>
                <p class="section-subtitle">
                    "We started EduLaunch after helping a dozen schools move online in a single term. "
                    "Everything we learned about onboarding staff, students and parents is built in."
                </p>
                <div class="stats">
                    <Stat value="120+" label="Schools onboarded" />
                    <Stat value="45k" label="Students reached" />
                    <Stat value="98%" label="Renewal rate" />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Stat(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="stat">
            <span class="stat-value">{value}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

#[component]
fn ServicesSection() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="container">
                <h2 class="section-title">"What we set up for you"</h2>
                <div class="card-grid">
                    <ServiceCard
                        icon=icons::CALENDAR
                        title="Timetables & classes"
                        description="Import your timetable once. Classes, rooms and substitutions stay in sync for everyone."
                    />
                    <ServiceCard
                        icon=icons::USERS
                        title="Parent communication"
                        description="Announcements, permission slips and meeting bookings without another app to install."
                    />
                    <ServiceCard
                        icon=icons::CHART
                        title="Progress reports"
                        description="Grades and attendance roll up into reports that are ready to share at term end."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="service-card">
            <div class="service-icon">
                <Icon name=icon class="icon-lg" />
            </div>
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

/// Pricing section component
#[component]
fn PricingSection() -> impl IntoView {
    view! {
        <section id="pricing" class="pricing">
            <div class="container">
                <h2 class="section-title">"Simple pricing per school"</h2>
                <p class="section-subtitle">"Every plan includes onboarding and staff training."</p>
                <div class="card-grid">
                    <PricingCard
                        name="Starter"
                        price="$149"
                        period="/month"
                        features=vec!["Up to 300 students", "Timetables & classes", "Email support"]
                        featured=false
                    />
                    <PricingCard
                        name="Campus"
                        price="$349"
                        period="/month"
                        features=vec![
                            "Up to 1,500 students",
                            "Parent communication",
                            "Progress reports",
                            "Priority support",
                        ]
                        featured=true
                    />
                    <PricingCard
                        name="District"
                        price="Custom"
                        period=""
                        features=vec![
                            "Unlimited schools",
                            "Single sign-on",
                            "Dedicated success manager",
                        ]
                        featured=false
                    />
                </div>
            </div>
        </section>
    }
}

/// Pricing card component
#[component]
fn PricingCard(
    name: &'static str,
    price: &'static str,
    period: &'static str,
    features: Vec<&'static str>,
    featured: bool,
) -> impl IntoView {
    let card_class = if featured { "pricing-card featured" } else { "pricing-card" };
    let cta_class = if featured {
        "btn btn-primary btn-block"
    } else {
        "btn btn-secondary btn-block"
    };

    view! {
        <div
            class=card_class
            on:mouseenter=move |ev| apply_card_hover(&ev, featured, true)
            on:mouseleave=move |ev| apply_card_hover(&ev, featured, false)
        >
            {featured.then(|| view! { <div class="badge">"Most popular"</div> })}
            <h3>{name}</h3>
            <div class="price">
                <span class="amount">{price}</span>
                <span class="period">{period}</span>
            </div>
            <ul class="features">
                {features.into_iter().map(|feature| {
                    view! {
                        <li>
                            <Icon name=icons::CHECK class="icon-sm" />
                            <span>{feature}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
            <AnchorLink href="#webinar" class=cta_class>
                "Book a walkthrough"
            </AnchorLink>
        </div>
    }
}

#[component]
fn WebinarSection() -> impl IntoView {
    view! {
        <section id="webinar" class="webinar">
            <div class="container webinar-layout">
                <div class="webinar-intro">
                    <h2 class="section-title">"Free onboarding webinar"</h2>
                    <p>
                        "A 45-minute live session for school leaders: how a term-one rollout works, "
                        "what staff need to prepare, and a Q&A with schools already using EduLaunch."
                    </p>
                    <ul class="webinar-points">
                        <li><Icon name=icons::CHECK class="icon-sm" />"Live walkthrough of the platform"</li>
                        <li><Icon name=icons::CHECK class="icon-sm" />"Rollout checklist for your staff"</li>
                        <li><Icon name=icons::CHECK class="icon-sm" />"Recording sent to every registrant"</li>
                    </ul>
                </div>
                <WebinarRegistrationForm />
            </div>
        </section>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    let settings = use_context::<SiteSettings>().unwrap_or_default();
    let mailto = format!("mailto:{}", settings.contact_email);

    view! {
        <section id="contact" class="contact">
            <div class="container">
                <h2 class="section-title">"Talk to us"</h2>
                <div class="contact-items">
                    <a class="contact-item" href=mailto>
                        <Icon name=icons::MAIL class="icon-lg" />
                        <span>{settings.contact_email.clone()}</span>
                    </a>
                    <a class="contact-item" href="tel:+18005550123">
                        <Icon name=icons::PHONE class="icon-lg" />
                        <span>"+1 (800) 555-0123"</span>
                    </a>
                </div>
                <ContactMessageForm />
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-content">
                <p>"© 2025 EduLaunch. All rights reserved."</p>
                <AnchorLink href="#home" class="footer-link">"Back to top"</AnchorLink>
            </div>
        </footer>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="EduLaunch - Digital Campus for Schools" />

        <Meta name="description" content="EduLaunch sets up timetables, parent communication and progress reports for schools. Join the free onboarding webinar." />
        <Meta name="keywords" content="school software, digital campus, timetables, parent communication, education webinar" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="EduLaunch - Digital Campus for Schools" />
        <Meta property="og:description" content="Bring every classroom online in a week. Join the free onboarding webinar." />

        <Link rel="canonical" href="https://edulaunch.app/" />
    }
}

/// Page styles
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            :root {
                --primary: #2563eb;
                --primary-dark: #1d4ed8;
                --text: #1f2937;
                --muted: #6b7280;
                --surface: #f8fafc;
                --success: #16a34a;
                --error: #dc2626;
            }

            * { box-sizing: border-box; margin: 0; padding: 0; }
            html { scroll-behavior: smooth; }
            body { font-family: system-ui, -apple-system, sans-serif; color: var(--text); line-height: 1.6; }
            body.menu-open { overflow: hidden; }

            .hidden { display: none; }
            .container { max-width: 1120px; margin: 0 auto; padding: 0 1.5rem; }
            .icon { width: 1.25rem; height: 1.25rem; }
            .icon-sm { width: 1rem; height: 1rem; color: var(--success); flex-shrink: 0; }
            .icon-lg { width: 1.5rem; height: 1.5rem; }

            .navbar {
                position: fixed; top: 0; left: 0; right: 0; z-index: 50;
                background: rgba(255, 255, 255, 0.9); backdrop-filter: blur(8px);
                transition: box-shadow 0.3s ease, padding 0.3s ease;
                padding: 1rem 0;
            }
            .navbar.scrolled { box-shadow: 0 4px 20px rgba(0, 0, 0, 0.08); padding: 0.5rem 0; }
            .nav-container { max-width: 1120px; margin: 0 auto; padding: 0 1.5rem; display: flex; align-items: center; justify-content: space-between; }
            .logo { display: flex; align-items: center; gap: 0.5rem; font-weight: 700; font-size: 1.25rem; color: var(--primary); text-decoration: none; }
            .nav-links { display: flex; gap: 1.5rem; list-style: none; }
            .nav-link { color: var(--muted); text-decoration: none; font-weight: 500; transition: color 0.2s ease; }
            .nav-link:hover, .nav-link.active { color: var(--primary); }
            .menu-toggle { display: none; background: none; border: none; cursor: pointer; color: var(--text); }

            @media (max-width: 768px) {
                .menu-toggle { display: block; }
                .nav-links {
                    position: fixed; top: 64px; left: 0; right: 0; flex-direction: column;
                    background: #fff; padding: 1.5rem; gap: 1rem;
                    transform: translateY(-150%); transition: transform 0.3s ease;
                    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.08);
                }
                .nav-links.active { transform: translateY(0); }
                .menu-toggle.active { color: var(--primary); }
                .form-row { grid-template-columns: 1fr; }
                .webinar-layout { grid-template-columns: 1fr; }
            }

            section { padding: 6rem 0; }
            .section-title { font-size: 2rem; margin-bottom: 1rem; text-align: center; }
            .section-subtitle { color: var(--muted); text-align: center; max-width: 640px; margin: 0 auto 3rem; }

            .hero { min-height: 100vh; display: flex; align-items: center; text-align: center; background: linear-gradient(135deg, #eff6ff, #fff); }
            .hero h1 { font-size: 3rem; line-height: 1.2; margin-bottom: 1.5rem; }
            .hero-subtitle { font-size: 1.25rem; color: var(--muted); max-width: 640px; margin: 0 auto 2rem; }
            .hero-actions { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
            .scroll-indicator { display: inline-block; margin-top: 3rem; color: var(--muted); }

            .btn { display: inline-flex; align-items: center; justify-content: center; gap: 0.5rem; padding: 0.75rem 1.5rem; border-radius: 0.5rem; font-weight: 600; text-decoration: none; border: 2px solid transparent; cursor: pointer; transition: background 0.2s ease; }
            .btn-primary { background: var(--primary); color: #fff; }
            .btn-primary:hover { background: var(--primary-dark); }
            .btn-primary:disabled { opacity: 0.7; cursor: not-allowed; }
            .btn-secondary { border-color: var(--primary); color: var(--primary); background: #fff; }
            .btn-block { width: 100%; }

            .stats { display: flex; justify-content: center; gap: 3rem; flex-wrap: wrap; }
            .stat { display: flex; flex-direction: column; align-items: center; }
            .stat-value { font-size: 2.5rem; font-weight: 700; color: var(--primary); }
            .stat-label { color: var(--muted); }

            .services, .webinar { background: var(--surface); }
            .card-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 2rem; margin-top: 2rem; }
            .service-card, .pricing-card { background: #fff; border-radius: 1rem; padding: 2rem; box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08); transition: transform 0.3s ease, box-shadow 0.3s ease; }
            .service-icon { width: 3rem; height: 3rem; border-radius: 0.75rem; background: #eff6ff; color: var(--primary); display: flex; align-items: center; justify-content: center; margin-bottom: 1rem; }
            .pricing-card { position: relative; display: flex; flex-direction: column; gap: 1rem; }
            .pricing-card.featured { border: 2px solid var(--primary); transform: scale(1.05); }
            .badge { position: absolute; top: -0.75rem; left: 50%; transform: translateX(-50%); background: var(--primary); color: #fff; padding: 0.25rem 1rem; border-radius: 999px; font-size: 0.875rem; }
            .price .amount { font-size: 2.25rem; font-weight: 700; }
            .price .period { color: var(--muted); }
            .features { list-style: none; display: flex; flex-direction: column; gap: 0.5rem; flex: 1; }
            .features li, .webinar-points li { display: flex; align-items: center; gap: 0.5rem; }

            .webinar-layout { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: start; }
            .webinar-intro .section-title { text-align: left; }
            .webinar-points { list-style: none; margin-top: 1.5rem; display: flex; flex-direction: column; gap: 0.5rem; }
            .form-container { background: #fff; border-radius: 1rem; padding: 2rem; box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08); }
            .webinar-form, .contact-form { display: flex; flex-direction: column; gap: 1rem; }
            .contact-form-container { max-width: 40rem; margin: 2rem auto 0; }
            .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
            .form-group { display: flex; flex-direction: column; gap: 0.25rem; }
            .form-group label { font-weight: 500; font-size: 0.875rem; }
            .form-group .required { color: var(--error); margin-left: 0.125rem; }
            .form-group input, .form-group select, .form-group textarea { padding: 0.625rem 0.75rem; border: 1px solid #d1d5db; border-radius: 0.5rem; font: inherit; }
            .form-group textarea { resize: vertical; }

            .form-message { display: flex; align-items: center; gap: 0.5rem; padding: 0.75rem 1rem; border-radius: 0.5rem; margin-bottom: 1rem; font-size: 0.9375rem; }
            .form-message.success { background: #f0fdf4; color: var(--success); border: 1px solid #bbf7d0; }
            .form-message.error { background: #fef2f2; color: var(--error); border: 1px solid #fecaca; }

            .spinner-inline { width: 1rem; height: 1rem; border: 2px solid rgba(255, 255, 255, 0.4); border-top-color: #fff; border-radius: 50%; animation: spin 0.8s linear infinite; }
            @keyframes spin { to { transform: rotate(360deg); } }

            .contact-items { display: flex; justify-content: center; gap: 2rem; flex-wrap: wrap; }
            .contact-item { display: flex; align-items: center; gap: 0.5rem; color: var(--primary); text-decoration: none; font-weight: 500; }

            .footer { background: var(--text); color: #e5e7eb; padding: 2rem 0; }
            .footer-content { display: flex; justify-content: space-between; align-items: center; }
            .footer-link { color: #e5e7eb; }
            "#
        </style>
    }
}
