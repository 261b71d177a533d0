//! Static copy for the page sections.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "home", label: "Home" },
    NavItem { id: "features", label: "Features" },
    NavItem { id: "gallery", label: "Instagram" },
    NavItem { id: "services", label: "Services" },
    NavItem { id: "about", label: "About" },
    NavItem { id: "contact", label: "Contact" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "✨",
        title: "Premium Quality",
        description: "Only the finest materials and techniques for extraordinary results that exceed expectations",
    },
    Feature {
        icon: "🎨",
        title: "Artistic Excellence",
        description: "Bespoke designs crafted by master nail artists with years of professional experience",
    },
    Feature {
        icon: "👑",
        title: "Luxury Experience",
        description: "Indulge in our exclusive premium service experience tailored for discerning clients",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub image: &'static str,
    pub popular: bool,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "💅",
        title: "Gel Polish on Natural Nails",
        price: "₹399",
        description: "Professional gel polish application on your natural nails for long-lasting shine",
        features: &[
            "Nail preparation and cuticle care",
            "Base coat application",
            "Premium gel polish",
            "Top coat for extra shine",
            "Lasts 2-3 weeks",
        ],
        image: "/assets/images/services/gel-polish-natural-nails.png",
        popular: false,
    },
    Service {
        icon: "🦶",
        title: "Gel Polish (Feet)",
        price: "₹299",
        description: "Beautiful gel polish application for your feet with professional finish",
        features: &[
            "Foot nail preparation",
            "Cuticle care and shaping",
            "Long-lasting gel polish",
            "Professional application",
            "Perfect for sandal season",
        ],
        image: "/assets/images/services/gel-polish-feet.png",
        popular: false,
    },
    Service {
        icon: "✨",
        title: "Temporary Extensions",
        price: "₹550",
        description: "Short-term nail extensions for special occasions and events",
        features: &[
            "Custom length extensions",
            "Perfect for events",
            "Professional shaping",
            "Gel polish included",
            "Easy removal process",
        ],
        image: "/assets/images/services/temporary-extensions.png",
        popular: false,
    },
    Service {
        icon: "👑",
        title: "Press-On Nails",
        price: "₹499",
        description: "Custom-fitted press-on nails for instant glamour and convenience",
        features: &[
            "Custom size fitting",
            "Various designs available",
            "Easy application",
            "Reusable options",
            "Stays up to 15-20 days",
        ],
        image: "/assets/images/services/press-on-nails.png",
        popular: true,
    },
    Service {
        icon: "🌟",
        title: "Gel Overlay",
        price: "₹799",
        description: "Protective gel overlay to strengthen and enhance your natural nails",
        features: &[
            "Strengthens natural nails",
            "Adds shine and protection",
            "Natural nail enhancement",
            "Long-lasting durability",
            "Healthy nail growth support",
        ],
        image: "/assets/images/services/gel-overlay.png",
        popular: false,
    },
    Service {
        icon: "💎",
        title: "Gel Extensions (Half Tips)",
        price: "₹899",
        description: "Professional gel extensions using half tips for natural-looking length",
        features: &[
            "Half tip application",
            "Custom length and shape",
            "Professional gel overlay",
            "Natural appearance",
            "Strong and durable",
        ],
        image: "/assets/images/services/gel-extensions-half-tips.png",
        popular: false,
    },
    Service {
        icon: "🎨",
        title: "Polygel Extensions",
        price: "₹799",
        description: "Modern polygel technology for lightweight, strong, and flexible extensions",
        features: &[
            "Lightweight feel",
            "Flexible and strong",
            "No damage to natural nails",
            "Custom shapes available",
            "Latest nail technology",
        ],
        image: "/assets/images/services/polygel-extensions.png",
        popular: false,
    },
    Service {
        icon: "💫",
        title: "Soft Gel-X Extensions",
        price: "₹899",
        description: "Premium Soft Gel-X extensions for natural-looking, flexible, and durable nail enhancement",
        features: &[
            "Soft and flexible feel",
            "Natural nail appearance",
            "Lightweight extensions",
            "Long-lasting durability",
            "Professional application",
        ],
        image: "/assets/images/services/soft-gel-x-extensions.png",
        popular: false,
    },
    Service {
        icon: "🧹",
        title: "Removal Services",
        price: "From ₹199",
        description: "Safe and professional removal of all types of nail enhancements",
        features: &[
            "Gel Polish Removal - ₹199",
            "Extension Removal - ₹299",
            "Gel Extension Removal - ₹399",
            "Safe removal process",
            "Nail care included",
        ],
        image: "/assets/images/services/removal-service.png",
        popular: false,
    },
];

pub const BOOKING_STEPS: &[(&str, &str)] = &[
    (
        "Follow & Message",
        "Follow @nakhakala on Instagram and send us a DM with your booking request",
    ),
    (
        "Share Your Vision",
        "Send inspiration photos, preferred dates, nail length, and any special requests",
    ),
    (
        "Confirm & Enjoy",
        "We'll confirm your appointment details and you're all set for your nail transformation!",
    ),
];

pub const BRAND_DESCRIPTION: &str = "Where elegance meets artistry. Experience premium press-on nails that feel like extensions, last up to a month, and turn heads wherever you go.";
