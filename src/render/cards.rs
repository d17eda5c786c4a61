use crate::date::year_label;
use crate::{Course, Education, Faculty, Thesis, ThesisType};

use super::{anchor_id, card_date_range, html_escape};

fn card(id: &str, primary: &str, range: &str) -> String {
    format!(
        r#"<article class="card" id="{}">
    <div class="card-row">
        <div>{}</div>
        {}
    </div>
</article>
"#,
        id, primary, range
    )
}

pub fn education_card(edu: &Education) -> String {
    let primary = format!(
        r#"<h3 class="card-title">{}</h3><p class="secondary">{} - {}</p>"#,
        html_escape(&edu.title),
        html_escape(&edu.institution),
        html_escape(&edu.faculty)
    );
    card(
        &anchor_id(&edu.title),
        &primary,
        &card_date_range(&year_label(&edu.start), &year_label(&edu.end)),
    )
}

pub fn thesis_card(thesis: &Thesis) -> String {
    let degree = match thesis.kind {
        ThesisType::Bachelor => "Bachelor",
        ThesisType::Master => "Master",
    };
    let faculty = match thesis.faculty {
        Faculty::Iiw => "IIW",
        Faculty::Wet => "WET",
    };
    let primary = format!(
        r#"<h3 class="card-title">{}</h3><p class="secondary">{} &middot; {} thesis ({})</p>"#,
        html_escape(&thesis.title),
        html_escape(&thesis.student),
        degree,
        faculty
    );
    // Only the completion year is meaningful for a thesis.
    let end = year_label(&thesis.end);
    card(&anchor_id(&thesis.title), &primary, &card_date_range(&end, &end))
}

pub fn course_card(course: &Course) -> String {
    let title = if course.url.is_empty() {
        html_escape(&course.title)
    } else {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
            html_escape(&course.url),
            html_escape(&course.title)
        )
    };
    card(
        &anchor_id(&course.title),
        &format!(r#"<h3 class="card-title">{}</h3>"#, title),
        &card_date_range(&year_label(&course.start), &year_label(&course.end)),
    )
}
