//! Fixed contact details shown beside the form.

pub const CONTACT_EMAIL: &str = "engrkayes914@gmail.com";
pub const RECIPIENT_NAME: &str = "Mahmudullah Kayes";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub label: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        name: "GitHub",
        href: "https://github.com/Kayes914",
        label: "GitHub Profile",
    },
    SocialLink {
        name: "LinkedIn",
        href: "https://www.linkedin.com/in/mahmudullah-kayes/",
        label: "LinkedIn Profile",
    },
    SocialLink {
        name: "WhatsApp",
        href: "https://wa.me/8801845901833",
        label: "WhatsApp Contact",
    },
    SocialLink {
        name: "Facebook",
        href: "https://www.facebook.com/MahmudullahKayes914",
        label: "Facebook Profile",
    },
];
