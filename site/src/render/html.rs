//! HTML renderer
//!
//! Renders the view contexts built by `SiteService` to complete HTML
//! documents. Every stored string is escaped before it reaches the markup.

use crate::app::{HomeView, JobView, PageView, RecruitmentView, SiteContext};
use crate::domain::entities::{ContactType, JobOffer, Lang, StaticPage};
use crate::routes::{home_path, job_path, page_href, recruitment_path, static_path};

/// Pick the UI string for `lang`
fn ui(lang: Lang, fr: &'static str, en: &'static str) -> &'static str {
    match lang {
        Lang::Fr => fr,
        Lang::En => en,
    }
}

/// Render the home page
pub fn render_home(view: &HomeView) -> String {
    let lang = view.site.lang;
    let mut body = String::new();

    match &view.page {
        Some(page) => {
            body.push_str(&format!("<h1>{}</h1>\n", escape_html(page.title(lang))));
            if let Some(image) = &page.main_image {
                body.push_str(&render_image(image, page.title(lang)));
            }
            body.push_str(&render_paragraphs(page.content(lang)));
        }
        None => {
            let name = view
                .site
                .config
                .as_ref()
                .map(|c| c.company_name.as_str())
                .unwrap_or_default();
            body.push_str(&format!("<h1>{}</h1>\n", escape_html(name)));
        }
    }

    if !view.featured_jobs.is_empty() {
        body.push_str("<section class=\"featured-jobs\">\n");
        body.push_str(&format!(
            "<h2>{}</h2>\n",
            ui(lang, "Nous recrutons", "We are hiring")
        ));
        body.push_str("<ul>\n");
        for job in &view.featured_jobs {
            body.push_str(&render_job_item(job, lang));
        }
        body.push_str("</ul>\n");
        body.push_str(&format!(
            "<p><a href=\"{}\">{}</a></p>\n",
            recruitment_path(lang),
            ui(lang, "Toutes nos offres", "All our openings")
        ));
        body.push_str("</section>\n");
    }

    let (title, meta) = match &view.page {
        Some(page) => (page.title(lang), page.meta_description(lang)),
        None => (ui(lang, "Accueil", "Home"), ""),
    };
    layout(&view.site, title, meta, home_path(lang.other()), &body)
}

/// Render one of the fixed content pages
pub fn render_page(view: &PageView, which: StaticPage) -> String {
    let lang = view.site.lang;
    let page = &view.page;
    let mut body = String::new();

    body.push_str(&format!("<h1>{}</h1>\n", escape_html(page.title(lang))));
    if let Some(image) = &page.main_image {
        body.push_str(&render_image(image, page.title(lang)));
    }
    body.push_str(&render_paragraphs(page.content(lang)));

    if which == StaticPage::Contact {
        body.push_str(&render_contact_form(lang));
    }

    layout(
        &view.site,
        page.title(lang),
        page.meta_description(lang),
        static_path(which, lang.other()),
        &body,
    )
}

/// Render the job offer listing
pub fn render_recruitment(view: &RecruitmentView) -> String {
    let lang = view.site.lang;
    let title = ui(lang, "Recrutement", "Recruitment");
    let mut body = format!("<h1>{}</h1>\n", title);

    if view.jobs.is_empty() {
        body.push_str(&format!(
            "<p class=\"empty\">{}</p>\n",
            ui(
                lang,
                "Aucune offre pour le moment.",
                "No openings at the moment."
            )
        ));
    } else {
        body.push_str("<ul class=\"jobs\">\n");
        for job in &view.jobs {
            body.push_str(&render_job_item(job, lang));
        }
        body.push_str("</ul>\n");
    }

    layout(&view.site, title, "", recruitment_path(lang.other()), &body)
}

/// Render a job offer detail page
pub fn render_job(view: &JobView) -> String {
    let lang = view.site.lang;
    let job = &view.job;
    let mut body = String::new();

    body.push_str("<article class=\"job\">\n");
    body.push_str(&format!("<h1>{}</h1>\n", escape_html(job.title(lang))));
    body.push_str("<dl>\n");
    body.push_str(&format!(
        "<dt>{}</dt><dd>{}</dd>\n",
        ui(lang, "Lieu", "Location"),
        escape_html(&job.location)
    ));
    body.push_str(&format!(
        "<dt>{}</dt><dd>{}</dd>\n",
        ui(lang, "Contrat", "Contract"),
        job.contract_type.label(lang)
    ));
    if let Some(salary) = salary_range(job) {
        body.push_str(&format!(
            "<dt>{}</dt><dd>{}</dd>\n",
            ui(lang, "Salaire annuel", "Annual salary"),
            salary
        ));
    }
    if let Some(deadline) = job.application_deadline {
        let date = match lang {
            Lang::Fr => deadline.format("%d/%m/%Y").to_string(),
            Lang::En => deadline.format("%Y-%m-%d").to_string(),
        };
        body.push_str(&format!(
            "<dt>{}</dt><dd>{}</dd>\n",
            ui(lang, "Date limite de candidature", "Application deadline"),
            date
        ));
    }
    body.push_str("</dl>\n");
    body.push_str(&render_paragraphs(job.description(lang)));
    body.push_str(&format!(
        "<p><a href=\"{}\">{}</a></p>\n",
        static_path(StaticPage::Contact, lang),
        ui(lang, "Postuler", "Apply")
    ));
    body.push_str("</article>\n");

    layout(
        &view.site,
        job.title(lang),
        "",
        &job_path(&job.slug, lang.other()),
        &body,
    )
}

fn render_job_item(job: &JobOffer, lang: Lang) -> String {
    format!(
        "<li{}><a href=\"{}\">{}</a> <span class=\"meta\">{} · {}</span></li>\n",
        if job.is_featured {
            " class=\"featured\""
        } else {
            ""
        },
        escape_html(&job_path(&job.slug, lang)),
        escape_html(job.title(lang)),
        escape_html(&job.location),
        job.contract_type.label(lang)
    )
}

fn salary_range(job: &JobOffer) -> Option<String> {
    match (job.salary_min, job.salary_max) {
        (Some(min), Some(max)) => Some(format!("{} - {} EUR", min, max)),
        (Some(min), None) => Some(format!("{} EUR +", min)),
        (None, Some(max)) => Some(format!("&le; {} EUR", max)),
        (None, None) => None,
    }
}

fn render_contact_form(lang: Lang) -> String {
    let mut form = format!(
        "<form class=\"contact\" method=\"post\" action=\"{}\" enctype=\"multipart/form-data\">\n",
        static_path(StaticPage::Contact, lang)
    );

    let fields: [(&str, &str, &str, bool); 5] = [
        ("name", ui(lang, "Nom", "Name"), "text", true),
        ("email", ui(lang, "Email", "Email"), "email", true),
        ("phone", ui(lang, "Téléphone", "Phone"), "tel", false),
        ("company", ui(lang, "Société", "Company"), "text", false),
        ("subject", ui(lang, "Sujet", "Subject"), "text", true),
    ];
    for (name, label, kind, required) in fields {
        form.push_str(&format!(
            "<label for=\"{name}\">{label}</label>\n<input type=\"{kind}\" id=\"{name}\" name=\"{name}\"{}>\n",
            if required { " required" } else { "" }
        ));
    }

    form.push_str(&format!(
        "<label for=\"contact_type\">{}</label>\n<select id=\"contact_type\" name=\"contact_type\">\n",
        ui(lang, "Type de demande", "Request type")
    ));
    for kind in ContactType::ALL {
        form.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            kind,
            if kind == ContactType::default() {
                " selected"
            } else {
                ""
            },
            escape_html(kind.label(lang))
        ));
    }
    form.push_str("</select>\n");

    form.push_str(&format!(
        "<label for=\"message\">{}</label>\n<textarea id=\"message\" name=\"message\" required></textarea>\n",
        ui(lang, "Message", "Message")
    ));
    form.push_str(&format!(
        "<label for=\"cv_file\">{}</label>\n<input type=\"file\" id=\"cv_file\" name=\"cv_file\" accept=\".pdf,.doc,.docx\">\n",
        ui(lang, "CV (PDF, DOC, DOCX, 5 Mo max.)", "CV (PDF, DOC, DOCX, 5 MB max.)")
    ));
    form.push_str(&format!(
        "<button type=\"submit\">{}</button>\n</form>\n",
        ui(lang, "Envoyer", "Send")
    ));
    form
}

fn render_image(path: &str, alt: &str) -> String {
    format!(
        "<img class=\"main-image\" src=\"/media/{}\" alt=\"{}\">\n",
        escape_html(path),
        escape_html(alt)
    )
}

/// Blank lines separate paragraphs; single newlines become `<br>`
fn render_paragraphs(text: &str) -> String {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            let lines: Vec<String> = p.lines().map(|l| escape_html(l.trim_end())).collect();
            format!("<p>{}</p>\n", lines.join("<br>\n"))
        })
        .collect()
}

/// Wrap a page body in the shared document: head, navigation and footer
fn layout(site: &SiteContext, title: &str, meta: &str, alternate: &str, body: &str) -> String {
    let lang = site.lang;
    let company = site
        .config
        .as_ref()
        .map(|c| c.company_name.as_str())
        .unwrap_or_default();

    let mut buf = String::new();
    buf.push_str("<!DOCTYPE html>\n");
    buf.push_str(&format!("<html lang=\"{}\">\n<head>\n", lang.code()));
    buf.push_str("<meta charset=\"utf-8\">\n");
    buf.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    if company.is_empty() {
        buf.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    } else {
        buf.push_str(&format!(
            "<title>{} | {}</title>\n",
            escape_html(title),
            escape_html(company)
        ));
    }
    if !meta.is_empty() {
        buf.push_str(&format!(
            "<meta name=\"description\" content=\"{}\">\n",
            escape_html(meta)
        ));
    }
    buf.push_str(&format!(
        "<link rel=\"alternate\" hreflang=\"{}\" href=\"{}\">\n",
        lang.other().code(),
        escape_html(alternate)
    ));
    buf.push_str("</head>\n<body>\n");

    // Header
    buf.push_str("<header>\n");
    buf.push_str(&format!("<a class=\"brand\" href=\"{}\">", home_path(lang)));
    match site.config.as_ref().and_then(|c| c.logo.as_deref()) {
        Some(logo) => buf.push_str(&format!(
            "<img src=\"/media/{}\" alt=\"{}\">",
            escape_html(logo),
            escape_html(company)
        )),
        None => buf.push_str(&escape_html(company)),
    }
    buf.push_str("</a>\n<nav>\n<ul>\n");
    for entry in &site.menu {
        buf.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            page_href(&entry.slug, lang),
            escape_html(&entry.title)
        ));
    }
    buf.push_str(&format!(
        "<li><a href=\"{}\">{}</a></li>\n",
        recruitment_path(lang),
        ui(lang, "Recrutement", "Recruitment")
    ));
    buf.push_str("</ul>\n</nav>\n");
    buf.push_str(&format!(
        "<a class=\"lang-switch\" hreflang=\"{}\" href=\"{}\">{}</a>\n",
        lang.other().code(),
        escape_html(alternate),
        ui(lang, "English", "Français")
    ));
    buf.push_str("</header>\n");

    buf.push_str("<main>\n");
    buf.push_str(body);
    buf.push_str("</main>\n");

    buf.push_str(&render_footer(site));
    buf.push_str("</body>\n</html>\n");
    buf
}

fn render_footer(site: &SiteContext) -> String {
    let lang = site.lang;
    let mut buf = String::from("<footer>\n");

    if let Some(config) = &site.config {
        buf.push_str("<address>\n");
        buf.push_str(&format!(
            "<strong>{}</strong><br>\n",
            escape_html(&config.company_name)
        ));
        buf.push_str(&format!("{}<br>\n", escape_html(&config.company_address)));
        buf.push_str(&format!("{}<br>\n", escape_html(&config.company_phone)));
        buf.push_str(&format!(
            "<a href=\"mailto:{0}\">{0}</a>\n",
            escape_html(&config.company_email)
        ));
        buf.push_str("</address>\n");

        let socials = [
            ("LinkedIn", config.linkedin_url.as_deref()),
            ("Twitter", config.twitter_url.as_deref()),
        ];
        for (name, url) in socials {
            if let Some(url) = url {
                buf.push_str(&format!(
                    "<a class=\"social\" href=\"{}\" rel=\"noopener\">{}</a>\n",
                    escape_html(url),
                    name
                ));
            }
        }
    }

    buf.push_str("<ul class=\"legal\">\n");
    let legal = [
        (StaticPage::Legal, ui(lang, "Mentions légales", "Legal notice")),
        (
            StaticPage::Privacy,
            ui(lang, "Protection des données", "Privacy policy"),
        ),
        (
            StaticPage::Cookies,
            ui(lang, "Politique des cookies", "Cookie policy"),
        ),
    ];
    for (page, label) in legal {
        buf.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            static_path(page, lang),
            label
        ));
    }
    buf.push_str("</ul>\n</footer>\n");
    buf
}

/// Escape text for use in HTML content and attribute values
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
