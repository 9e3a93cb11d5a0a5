//! Static copy rendered by the page sections.

pub const OWNER: &str = "Aftab";

pub const HERO_NAME: &str = "Aftab Alam";
pub const HERO_ROLE: &str = "Full Stack Developer";
pub const HERO_TAGLINE: &str = "I build fast, accessible web applications end to end, from database schemas to the last pixel of the interface.";

pub const ABOUT_TEXT: [&str; 2] = [
    "I'm a developer who enjoys turning rough ideas into products people actually use. Most of my work sits on the web: responsive frontends, typed APIs behind them, and the deployment glue in between.",
    "Lately I've been writing more Rust, compiling it to WebAssembly, and finding out how far a single-language stack can go. Outside of code I read, hike, and take too many photos of street food.",
];

/// Section anchors, in page order.
pub mod section {
    pub const ABOUT: &str = "about";
    pub const PROJECTS: &str = "projects";
    pub const SKILLS: &str = "skills";
    pub const ACHIEVEMENTS: &str = "achievements";
    pub const TESTIMONIALS: &str = "testimonials";
    pub const CONTACT: &str = "contact";

    pub const ALL: [&str; 6] = [ABOUT, PROJECTS, SKILLS, ACHIEVEMENTS, TESTIMONIALS, CONTACT];
}

#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAVIGATION_LINKS: [NavLink; 6] = [
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Projects", href: "#projects" },
    NavLink { label: "Skills", href: "#skills" },
    NavLink { label: "Achievements", href: "#achievements" },
    NavLink { label: "Testimonials", href: "#testimonials" },
    NavLink { label: "Contact", href: "#contact" },
];

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_MEDIA_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        href: "https://github.com/aftab",
        icon: "devicon-github-plain",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com/in/aftab",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "Twitter",
        href: "https://twitter.com/aftab",
        icon: "devicon-twitter-original",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
}

pub const SKILLS: [Skill; 8] = [
    Skill { name: "React", icon: "devicon-react-original colored" },
    Skill { name: "JavaScript", icon: "devicon-javascript-plain colored" },
    Skill { name: "TypeScript", icon: "devicon-typescript-plain colored" },
    Skill { name: "Node.js", icon: "devicon-nodejs-plain colored" },
    Skill { name: "Rust", icon: "devicon-rust-original" },
    Skill { name: "Tailwind CSS", icon: "devicon-tailwindcss-original colored" },
    Skill { name: "MongoDB", icon: "devicon-mongodb-plain colored" },
    Skill { name: "Git", icon: "devicon-git-plain colored" },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub href: Option<&'static str>,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Portfolio",
        description: "This site. Server-rendered with Leptos and hydrated from WebAssembly, with a contact form that talks to EmailJS straight from the browser.",
        technologies: &["Rust", "Leptos", "Tailwind CSS"],
        href: Some("https://github.com/aftab/portfolio-site"),
    },
    Project {
        title: "Expense Tracker",
        description: "A budgeting app with recurring transactions, category rollups and CSV export.",
        technologies: &["React", "Node.js", "MongoDB"],
        href: Some("https://github.com/aftab/expense-tracker"),
    },
    Project {
        title: "Weather Dashboard",
        description: "Seven day forecasts with hourly charts, geolocation and offline caching.",
        technologies: &["JavaScript", "Chart.js", "OpenWeather API"],
        href: None,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Achievement {
    pub title: &'static str,
    pub issuer: &'static str,
    pub year: u16,
}

pub const ACHIEVEMENTS: [Achievement; 3] = [
    Achievement {
        title: "Winner, Campus Hackathon",
        issuer: "Developer Student Club",
        year: 2023,
    },
    Achievement {
        title: "Full Stack Web Development Certification",
        issuer: "freeCodeCamp",
        year: 2022,
    },
    Achievement {
        title: "Top 5% on algorithms track",
        issuer: "HackerRank",
        year: 2022,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        quote: "Aftab picked up our codebase in days and shipped the new dashboard ahead of schedule. Clear communicator, careful reviewer.",
        author: "Priya Sharma",
        role: "Engineering Lead, Finlytics",
    },
    Testimonial {
        quote: "Asks the right questions before writing a line of code, and the result shows it.",
        author: "Daniel Okafor",
        role: "Founder, Studio Nine",
    },
];
