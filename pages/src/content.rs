//! Static copy and imagery of the landing page.

use crate::components::{ICON_CHART_LINE, ICON_DEVICE_MOBILE, ICON_TERMINAL};
use crate::types::{ContactField, FieldKind, Service};

/// Title used when the caller gives no override.
pub const DEFAULT_TITLE: &str = "Parallax Landing";

/// Document language.
pub const LANG: &str = "ru";

/// Anchor of the contact section (target of the hero call-to-action).
pub const CONTACT_ANCHOR: &str = "contact";

pub(crate) const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?ixlib=rb-4.0.3&auto=format&fit=crop&w=1950&q=80";
pub(crate) const HERO_HEADING: &str = "Добро пожаловать в будущее";
pub(crate) const HERO_LEAD: &str = "Инновационные решения для вашего бизнеса";
pub(crate) const HERO_CTA: &str = "Начать сейчас";

pub(crate) const ABOUT_HEADING: &str = "О нашей компании";
pub(crate) const ABOUT_LEAD: &str =
    "Мы создаем уникальные решения, которые помогают бизнесу расти и развиваться в цифровую эпоху.";
pub(crate) const ABOUT_POINTS: [&str; 3] = [
    "Инновационные технологии",
    "Профессиональная команда",
    "Гарантия качества",
];
pub(crate) const ABOUT_IMAGE: &str = "https://images.unsplash.com/photo-1552664730-d307ca884978?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80";
pub(crate) const ABOUT_IMAGE_ALT: &str = "О нас";

pub(crate) const BANNER_IMAGE: &str = "https://images.unsplash.com/photo-1518709268805-4e9042af2176?ixlib=rb-4.0.3&auto=format&fit=crop&w=1950&q=80";
pub(crate) const BANNER_HEADING: &str = "Инновации в каждом проекте";
pub(crate) const BANNER_LEAD: &str =
    "Мы используем современные технологии для достижения лучших результатов";

pub(crate) const SERVICES_HEADING: &str = "Наши услуги";
pub(crate) const SERVICES_LEAD: &str = "Мы предлагаем комплексные решения для вашего бизнеса";

/// Cards of the services grid, in display order.
pub const SERVICES: [Service; 3] = [
    Service {
        icon: ICON_TERMINAL,
        title: "Веб-разработка",
        description: "Создание современных и функциональных веб-сайтов и приложений.",
    },
    Service {
        icon: ICON_DEVICE_MOBILE,
        title: "Мобильные приложения",
        description: "Разработка кроссплатформенных мобильных приложений.",
    },
    Service {
        icon: ICON_CHART_LINE,
        title: "Digital-маркетинг",
        description: "Комплексное продвижение вашего бизнеса в интернете.",
    },
];

pub(crate) const CONTACT_HEADING: &str = "Свяжитесь с нами";
pub(crate) const CONTACT_SUBMIT: &str = "Отправить сообщение";

/// Controls of the contact form, all `required`.
pub const CONTACT_FIELDS: [ContactField; 3] = [
    ContactField {
        name: "name",
        kind: FieldKind::Text,
        placeholder: "Ваше имя",
    },
    ContactField {
        name: "email",
        kind: FieldKind::Email,
        placeholder: "Email",
    },
    ContactField {
        name: "message",
        kind: FieldKind::TextArea { rows: 5 },
        placeholder: "Сообщение",
    },
];

pub(crate) const FOOTER_TEXT: &str = "© 2024 Parallax Landing. Все права защищены.";

pub(crate) const NOT_FOUND_TITLE: &str = "Страница не найдена — Parallax Landing";
pub(crate) const NOT_FOUND_HEADING: &str = "404";
pub(crate) const NOT_FOUND_LEAD: &str = "Такой страницы нет";
pub(crate) const NOT_FOUND_BACK: &str = "На главную";
