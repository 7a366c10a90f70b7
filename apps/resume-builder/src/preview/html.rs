//! HTML layout. Plain strings are escaped; rich text descriptions are
//! trusted markup and inserted verbatim.

use crate::models::escape_html;
use crate::preview::PreviewDocument;

pub fn render_html(doc: &PreviewDocument) -> String {
    let mut html = String::from("<article class=\"resume\">\n");

    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(&doc.header.name)));
    html.push_str(&format!(
        "<p class=\"job-title\">{}</p>\n",
        escape_html(&doc.header.job_title)
    ));
    html.push_str("</header>\n<main>\n");

    html.push_str("<section class=\"about\">\n<h2>About Me</h2>\n");
    html.push_str(&format!("<p>{}</p>\n</section>\n", escape_html(&doc.about)));

    html.push_str("<section class=\"employment\">\n<h2>Employment History</h2>\n");
    for job in &doc.employment {
        html.push_str("<div class=\"entry\">\n");
        html.push_str(&format!("<h3>{}</h3>\n", escape_html(&job.heading)));
        html.push_str(&format!("<p class=\"dates\">{}</p>\n", escape_html(&job.dates)));
        html.push_str(&format!(
            "<div class=\"description\">{}</div>\n",
            job.description.as_markup()
        ));
        html.push_str("</div>\n");
    }
    html.push_str("</section>\n");

    html.push_str("<section class=\"education\">\n<h2>Education</h2>\n");
    for edu in &doc.education {
        html.push_str(&format!(
            "<div class=\"entry\">\n<h3>{}</h3>\n<p>{}</p>\n</div>\n",
            escape_html(&edu.degree),
            escape_html(&edu.detail)
        ));
    }
    html.push_str("</section>\n</main>\n<aside>\n");

    html.push_str("<section class=\"contact\">\n<h2>Contact</h2>\n<ul>\n");
    for line in [&doc.contact.location, &doc.contact.phone, &doc.contact.email] {
        html.push_str(&format!("<li>{}</li>\n", escape_html(line)));
    }
    html.push_str("</ul>\n</section>\n");

    html.push_str("<section class=\"skills\">\n<h2>Technical Skills</h2>\n<ul>\n");
    for skill in &doc.skills {
        html.push_str(&format!("<li>{}</li>\n", escape_html(skill)));
    }
    html.push_str("</ul>\n</section>\n");

    html.push_str("<section class=\"certificates\">\n<h2>Certificates</h2>\n");
    for cert in &doc.certificates {
        html.push_str(&format!(
            "<div class=\"entry\">\n<h3>{}</h3>\n<p class=\"dates\">{}</p>\n<p>{}</p>\n</div>\n",
            escape_html(&cert.name),
            escape_html(&cert.date),
            escape_html(&cert.description)
        ));
    }
    html.push_str("</section>\n");

    html.push_str("<section class=\"languages\">\n<h2>Languages</h2>\n<ul>\n");
    for lang in &doc.languages {
        html.push_str(&format!(
            "<li>{} <span class=\"proficiency\">{}</span></li>\n",
            escape_html(&lang.name),
            escape_html(&lang.proficiency)
        ));
    }
    html.push_str("</ul>\n</section>\n</aside>\n</article>\n");
    html
}
