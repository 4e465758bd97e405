//! The fixed 12-slide AgriVerse deck. All positions are hand-specified
//! inch coordinates; the only computed layout is the y-cursor over lists.

use crate::slides::deck::{Deck, Slide};
use crate::slides::shapes::Align;
use crate::slides::theme::{self, Rgb, SLIDE_WIDTH_IN};

/// Fixed output artifact, written to the working directory. The generator
/// takes no flags and no environment configuration.
pub const OUTPUT_FILE: &str = "AgriVerse_Ultimate.pptx";

/// Builds the full deck in presentation order.
pub fn build() -> Deck {
    let mut deck = Deck::new();

    cover(deck.add_slide());
    tech_stack(deck.add_slide());
    farmer_role(deck.add_slide());
    joint_loan_logic(deck.add_slide());
    buyer_role(deck.add_slide());
    bank_role(deck.add_slide());
    expert_and_admin(deck.add_slide());
    navigation_architecture(deck.add_slide());
    state_management(deck.add_slide());
    project_status(deck.add_slide());
    roadmap(deck.add_slide());
    closing(deck.add_slide());

    deck
}

fn title(slide: &mut Slide, text: &str, color: Rgb) {
    slide.text(text, 0.5, 0.4, 10.0, 0.8, 32, color, true, Align::Left);
}

/// P1: cover.
fn cover(slide: &mut Slide) {
    // Decorative glow standing in for the WebGL planet.
    slide.oval(8.0, -2.0, 8.0, 8.0, Rgb(20, 40, 60));

    slide.text(
        "AgriVerse",
        1.0,
        2.5,
        10.0,
        2.0,
        96,
        theme::TEXT_WHITE,
        true,
        Align::Left,
    );
    slide.text(
        "Agricultural finance & sales platform · Grow smart, harvest the future",
        1.2,
        4.0,
        10.0,
        1.0,
        28,
        theme::FARMER,
        false,
        Align::Left,
    );
    slide.text(
        "Team 10 mid-term review | Jan 2025 | v1.2",
        1.2,
        6.5,
        8.0,
        0.5,
        16,
        theme::TEXT_GREY,
        false,
        Align::Left,
    );
}

/// P2: overview and tech stack.
fn tech_stack(slide: &mut Slide) {
    title(slide, "Project tech stack", theme::TEXT_WHITE);

    slide.card(0.5, 1.5, 6.0, 5.0, theme::BG_CARD);
    slide.text(
        "Frontend Core",
        0.8,
        1.8,
        4.0,
        0.5,
        20,
        theme::TECH,
        true,
        Align::Left,
    );

    let techs = [
        ("React 18", "Concurrent mode, Suspense"),
        ("TypeScript", "Strict type checking"),
        ("Vite 5.x", "Instant server start"),
        ("Zustand", "Atomic state management"),
        ("Tailwind", "Utility-first CSS"),
        ("WebGL", "Three.js / React-Three-Fiber"),
    ];
    let mut y_pos = 2.4;
    for (name, detail) in techs {
        slide.text(
            &format!("• {}", name),
            0.8,
            y_pos,
            2.0,
            0.4,
            16,
            theme::TEXT_WHITE,
            true,
            Align::Left,
        );
        slide.text(detail, 3.0, y_pos, 3.0, 0.4, 14, theme::TEXT_GREY, false, Align::Left);
        y_pos += 0.45;
    }

    slide.placeholder(6.8, 1.5, 6.0, 5.0, "Home Page 3D Planet");
}

/// P3: farmer role.
fn farmer_role(slide: &mut Slide) {
    title(slide, "Farmer role: finance and sales in one", theme::FARMER);

    slide.placeholder(0.5, 1.5, 7.5, 5.0, "Farmer Dashboard & Joint Loan");
    slide.card(8.3, 1.5, 4.5, 5.0, theme::BG_CARD);

    let features = [
        (
            "Field dashboard",
            "Visual analytics for yield and revenue, updated live",
        ),
        (
            "Joint loan matching",
            "Applications below the bank threshold are pooled automatically",
        ),
        (
            "E-signing",
            "Paperless, legally binding contracts for the whole flow",
        ),
        (
            "Field market",
            "One-click product listing with batch shipping labels",
        ),
    ];
    let mut cur_y = 1.8;
    for (name, detail) in features {
        slide.text(name, 8.5, cur_y, 4.0, 0.4, 18, theme::FARMER, true, Align::Left);
        slide.text(
            detail,
            8.5,
            cur_y + 0.35,
            4.0,
            0.6,
            14,
            theme::TEXT_GREY,
            false,
            Align::Left,
        );
        cur_y += 1.1;
    }
}

/// P4: joint-loan business logic as three step cards.
fn joint_loan_logic(slide: &mut Slide) {
    title(slide, "Core business logic: joint loans", theme::FARMER);

    let steps = [
        (
            "01. Application",
            "Requested amount below the bank minimum\ntriggers joint-loan mode automatically",
        ),
        (
            "02. Smart matching",
            "Candidates are ranked by:\n- credit score\n- requested amount\n- growing season\nand the best partners are suggested",
        ),
        (
            "03. Joint credit",
            "A matched group forms one asset package\nThe bank approves once, disburses individually",
        ),
    ];

    let card_w = 3.5;
    let card_h = 4.0;
    let gap = 0.5;
    let start_x = 1.0;
    for (i, (step, detail)) in steps.iter().enumerate() {
        let x = start_x + (card_w + gap) * i as f64;
        slide.card(x, 2.0, card_w, card_h, theme::BG_CARD);
        slide.text(step, x + 0.2, 2.2, card_w, 0.5, 20, theme::TEXT_WHITE, true, Align::Left);
        slide.text(
            detail,
            x + 0.2,
            3.0,
            card_w - 0.4,
            2.0,
            16,
            theme::TEXT_GREY,
            false,
            Align::Left,
        );
    }
}

/// P5: buyer role.
fn buyer_role(slide: &mut Slide) {
    title(slide, "Buyer role: immersive purchasing", theme::BUYER);

    slide.placeholder(0.5, 1.5, 4.0, 5.0, "Buyer Dashboard");
    slide.placeholder(4.7, 1.5, 4.0, 5.0, "Cart & Product Detail");

    slide.card(8.9, 1.5, 4.0, 5.0, theme::BG_CARD);
    slide.text("Highlights", 9.1, 1.8, 3.0, 0.5, 20, theme::BUYER, true, Align::Left);

    let features = [
        "Purchasing cockpit",
        "Side-by-side product comparison",
        "Cart with installment payment",
        "End-to-end refund tracking",
    ];
    let mut by = 2.5;
    for feature in features {
        slide.text(
            &format!("• {}", feature),
            9.1,
            by,
            3.5,
            0.5,
            16,
            theme::TEXT_WHITE,
            false,
            Align::Left,
        );
        by += 0.6;
    }
}

/// P6: bank role.
fn bank_role(slide: &mut Slide) {
    title(slide, "Bank role: intelligent risk control", theme::BANK);

    slide.placeholder(0.5, 1.5, 8.5, 5.0, "Risk Control Cockpit (Charts)");

    slide.card(9.3, 1.5, 3.5, 5.0, theme::BG_CARD);
    slide.text("Credit factory", 9.5, 1.8, 3.0, 0.5, 20, theme::BANK, true, Align::Left);

    let features = [
        ("Scorecard models", "Automatic A/B/C scoring"),
        ("Post-loan alerts", "Monitors unusual cash flows"),
        ("E-contracts", "Generate and sign in one click"),
        ("Disbursement", "Automated payout pipeline"),
    ];
    let mut by = 2.5;
    for (name, detail) in features {
        slide.text(name, 9.5, by, 3.0, 0.3, 16, theme::TEXT_WHITE, true, Align::Left);
        slide.text(
            detail,
            9.5,
            by + 0.25,
            3.0,
            0.3,
            12,
            theme::TEXT_GREY,
            false,
            Align::Left,
        );
        by += 0.9;
    }
}

/// P7: expert and admin, side by side.
fn expert_and_admin(slide: &mut Slide) {
    title(
        slide,
        "Ecosystem: expert services and operations",
        theme::TEXT_WHITE,
    );

    slide.card(0.5, 1.5, 6.0, 5.0, theme::BG_CARD);
    slide.text("Expert", 0.8, 1.8, 4.0, 0.5, 24, theme::EXPERT, true, Align::Left);
    slide.placeholder(0.8, 2.5, 5.4, 3.0, "Expert Q&A / Knowledge");
    slide.text(
        "• Paid Q&A and knowledge monetization\n• Appointment calendar management",
        0.8,
        5.8,
        5.0,
        1.0,
        16,
        theme::TEXT_GREY,
        false,
        Align::Left,
    );

    slide.card(6.8, 1.5, 6.0, 5.0, theme::BG_CARD);
    slide.text("Admin", 7.1, 1.8, 4.0, 0.5, 24, theme::ADMIN, true, Align::Left);
    slide.placeholder(7.1, 2.5, 5.4, 3.0, "Admin Operation Center");
    slide.text(
        "• Three-stage review for content, products and experts\n• Platform-wide permissions and audit logs",
        7.1,
        5.8,
        5.0,
        1.0,
        16,
        theme::TEXT_GREY,
        false,
        Align::Left,
    );
}

/// P8: the three-level navigation diagram.
fn navigation_architecture(slide: &mut Slide) {
    title(slide, "Tech highlight: three-level navigation", theme::TECH);

    let base_y = 2.0;

    slide.card(2.0, base_y, 9.0, 1.0, theme::TECH);
    slide.text(
        "Level 1: top tab navigation",
        2.5,
        base_y + 0.2,
        8.0,
        0.5,
        20,
        Rgb(0, 0, 0),
        true,
        Align::Center,
    );

    slide.text(
        "⬇ navigateToTab()",
        0.0,
        base_y + 1.0,
        SLIDE_WIDTH_IN,
        0.5,
        14,
        theme::TEXT_GREY,
        false,
        Align::Center,
    );

    slide.card(3.0, base_y + 1.5, 7.0, 1.0, Rgb(0, 150, 136));
    slide.text(
        "Level 2: page sub-routes",
        3.5,
        base_y + 1.7,
        6.0,
        0.5,
        20,
        theme::TEXT_WHITE,
        true,
        Align::Center,
    );

    slide.text(
        "⬇ navigateToSubRoute()",
        0.0,
        base_y + 2.5,
        SLIDE_WIDTH_IN,
        0.5,
        14,
        theme::TEXT_GREY,
        false,
        Align::Center,
    );

    slide.card(4.0, base_y + 3.0, 5.0, 1.0, Rgb(0, 100, 100));
    slide.text(
        "Level 3: mobile bottom bar",
        4.5,
        base_y + 3.2,
        4.0,
        0.5,
        20,
        theme::TEXT_WHITE,
        true,
        Align::Center,
    );
}

/// P9: state management highlight.
fn state_management(slide: &mut Slide) {
    title(slide, "Tech highlight: Zustand state management", theme::TECH);

    slide.placeholder(0.5, 1.5, 5.0, 5.0, "Store Code Snippet");

    slide.card(6.0, 1.5, 6.8, 5.0, theme::BG_CARD);
    slide.text(
        "Modular store design",
        6.2,
        1.8,
        6.0,
        0.5,
        24,
        theme::TEXT_WHITE,
        true,
        Align::Left,
    );

    let stores = [
        "financingStore: interest math and repayment schedules",
        "cartStore: local persistence, automatic totals",
        "userStore: role-based access control and token handling",
        "msgStore: global notifications over WebSocket",
    ];
    let mut sy = 2.5;
    for store in stores {
        slide.text(
            &format!("• {}", store),
            6.2,
            sy,
            6.4,
            0.5,
            18,
            theme::TEXT_GREY,
            false,
            Align::Left,
        );
        sy += 0.8;
    }
}

/// P10: status metrics as three stat cards.
fn project_status(slide: &mut Slide) {
    title(slide, "Project status", theme::TEXT_WHITE);

    let metrics = [
        ("100%", "API integration", "115/115 endpoints passing", theme::FARMER),
        ("60+", "Feature pages", "All five roles covered", theme::TECH),
        ("V1.2", "Current version", "Stable architecture", theme::ADMIN),
    ];

    let mut mx = 0.5;
    let mw = 3.8;
    for (figure, name, detail, color) in metrics {
        slide.card(mx, 2.0, mw, 4.0, theme::BG_CARD);
        slide.text(figure, mx, 2.5, mw, 1.5, 80, color, true, Align::Center);
        slide.text(name, mx, 4.0, mw, 0.5, 20, theme::TEXT_WHITE, true, Align::Center);
        slide.text(detail, mx, 4.6, mw, 0.5, 16, theme::TEXT_GREY, false, Align::Center);
        mx += mw + 0.4;
    }
}

/// P11: roadmap.
fn roadmap(slide: &mut Slide) {
    title(slide, "Future roadmap", theme::TEXT_WHITE);

    slide.card(1.0, 2.0, 11.3, 4.0, theme::BG_CARD);

    let phases = [
        ("Phase 1: testing", "E2E coverage of the core flows (Cypress)"),
        ("Phase 2: performance", "Micro-frontend split, lazy-loaded routes"),
        ("Phase 3: ecosystem", "PWA offline support, i18n"),
        ("Phase 4: realtime", "WebSocket messaging end to end"),
    ];
    let mut ty = 2.4;
    for (phase, detail) in phases {
        slide.text(phase, 1.5, ty, 4.0, 0.5, 20, theme::TECH, true, Align::Left);
        slide.text(detail, 5.0, ty, 7.0, 0.5, 20, theme::TEXT_GREY, false, Align::Left);
        ty += 0.8;
    }
}

/// P12: closing slide.
fn closing(slide: &mut Slide) {
    slide.text(
        "AgriVerse",
        0.0,
        3.0,
        SLIDE_WIDTH_IN,
        1.5,
        60,
        theme::TEXT_WHITE,
        true,
        Align::Center,
    );
    slide.text(
        "Thanks for watching · Q&A",
        0.0,
        4.5,
        SLIDE_WIDTH_IN,
        1.0,
        24,
        theme::FARMER,
        false,
        Align::Center,
    );
}
