use crate::preview::PreviewDocument;

const RULE_WIDTH: usize = 60;

/// Terminal layout: main column first, then the sidebar sections.
pub fn render_text(doc: &PreviewDocument) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", doc.header.name));
    out.push_str(&format!("{}\n", doc.header.job_title));
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');

    heading(&mut out, "About Me");
    out.push_str(&format!("{}\n", doc.about));

    heading(&mut out, "Employment History");
    if doc.employment.is_empty() {
        out.push_str("(none)\n");
    }
    for job in &doc.employment {
        out.push_str(&format!("{}\n", job.heading));
        out.push_str(&format!("{}\n", job.dates));
        for line in job.description.to_plain_text().lines() {
            out.push_str(&format!("  {line}\n"));
        }
        out.push('\n');
    }

    heading(&mut out, "Education");
    if doc.education.is_empty() {
        out.push_str("(none)\n");
    }
    for edu in &doc.education {
        out.push_str(&format!("{}\n{}\n", edu.degree, edu.detail));
    }

    out.push_str(&format!("\n{}\n", "-".repeat(RULE_WIDTH)));

    heading(&mut out, "Contact");
    out.push_str(&format!(
        "{}\n{}\n{}\n",
        doc.contact.location, doc.contact.phone, doc.contact.email
    ));

    heading(&mut out, "Technical Skills");
    bullets(&mut out, doc.skills.iter().cloned());

    heading(&mut out, "Certificates");
    if doc.certificates.is_empty() {
        out.push_str("(none)\n");
    }
    for cert in &doc.certificates {
        out.push_str(&format!("{} ({})\n", cert.name, cert.date));
        if !cert.description.is_empty() {
            out.push_str(&format!("  {}\n", cert.description));
        }
    }

    heading(&mut out, "Languages");
    bullets(
        &mut out,
        doc.languages
            .iter()
            .map(|lang| format!("{}: {}", lang.name, lang.proficiency)),
    );
    out
}

fn heading(out: &mut String, title: &str) {
    if !out.ends_with("\n\n") {
        out.push('\n');
    }
    out.push_str(&format!("{}\n", title.to_uppercase()));
}

fn bullets(out: &mut String, items: impl Iterator<Item = String>) {
    let mut any = false;
    for item in items {
        out.push_str(&format!("- {item}\n"));
        any = true;
    }
    if !any {
        out.push_str("(none)\n");
    }
}
