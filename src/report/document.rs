use std::fmt::Write as _;

use crate::analysis::ResponseStatsSummary;
use crate::config::ReportConfig;
use crate::region::Region;
use crate::report::escape_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Background,
    InterventionEffect,
    Chart,
    Conclusion,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    /// Lead sentence followed by bullet points.
    Text { lead: String, bullets: Vec<String> },
    /// Inline SVG markup.
    Chart { svg: String, caption: String },
    Notice(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub title: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    pub sections: Vec<Section>,
}

pub fn build_document(
    summary: &ResponseStatsSummary,
    region: &Region,
    config: &ReportConfig,
    chart_svg: Option<&str>,
) -> Document {
    let mean = summary.high_risk_mean_minutes;
    let target = config.target_minutes;
    let name = &region.full_name;

    let background = Section {
        kind: SectionKind::Background,
        title: "배경 및 문제 인식".to_string(),
        body: SectionBody::Text {
            lead: format!("{name}의 산악 지형은 구조대의 신속한 접근을 어렵게 만듭니다."),
            bullets: vec![
                format!("고위험 사고 대응 지연: 분석 결과 평균 {mean:.1}분 소요"),
                format!("골든타임({target:.1}분) 초과로 인한 생명 위험 증가"),
                "지리적 접근성 한계로 인한 구조 효율성 저하".to_string(),
            ],
        },
    };

    let effect = Section {
        kind: SectionKind::InterventionEffect,
        title: "AAM 도입 효과".to_string(),
        body: SectionBody::Text {
            lead: "AAM(Advanced Air Mobility) 시스템 도입으로 다음과 같은 효과를 기대할 수 있습니다:"
                .to_string(),
            bullets: vec![
                format!("대응시간 단축: {mean:.1}분 → {target:.1}분으로 개선"),
                format!("연간 추가 구조 인원: 약 {}명", summary.estimated_lives_saved),
                format!("생존율 증대: 약 +{}%", config.survival_increase_pct),
                format!(
                    "사회적 비용 절감: 약 {:.0}억 원",
                    summary.estimated_cost_saving_units
                ),
            ],
        },
    };

    let chart = Section {
        kind: SectionKind::Chart,
        title: "구조시간 개선 효과".to_string(),
        body: match chart_svg {
            Some(svg) => SectionBody::Chart {
                svg: svg.to_string(),
                caption: format!("{name} 지역 구조시간 개선 효과"),
            },
            None => SectionBody::Notice(
                "차트를 생성하지 못해 이 보고서에는 차트가 포함되지 않았습니다.".to_string(),
            ),
        },
    };

    let conclusion = Section {
        kind: SectionKind::Conclusion,
        title: "결론 및 제언".to_string(),
        body: SectionBody::Text {
            lead: format!(
                "AAM 도입은 {name} 지역의 산악 구조 역량을 획기적으로 향상시킬 것입니다."
            ),
            bullets: vec![
                "단계적 도입을 통한 시범 운영 필요".to_string(),
                "관련 인프라 및 법제도 정비 필요".to_string(),
                "구조대원 전문 교육 프로그램 개발 필요".to_string(),
            ],
        },
    };

    Document {
        title: format!("{name} AAM 도입 효과 보고서"),
        sections: vec![background, effect, chart, conclusion],
    }
}

/// Renders a print-ready HTML page; each section starts on its own page
/// when printed.
pub fn render_html(doc: &Document) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html lang=\"ko\">");
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, "<meta charset=\"UTF-8\">");
    let _ = writeln!(out, "<title>{}</title>", escape_text(&doc.title));
    let _ = writeln!(out, "<style>{}</style>", inline_css());
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");
    let _ = writeln!(out, "<header class=\"banner\"><h1>{}</h1></header>", escape_text(&doc.title));
    for section in &doc.sections {
        render_section(&mut out, section);
    }
    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");
    out
}

fn render_section(out: &mut String, section: &Section) {
    let _ = writeln!(out, "<section class=\"{}\">", section_class(section.kind));
    let _ = writeln!(out, "<h2>{}</h2>", escape_text(&section.title));
    match &section.body {
        SectionBody::Text { lead, bullets } => {
            let _ = writeln!(out, "<p>{}</p>", escape_text(lead));
            let _ = writeln!(out, "<ul>");
            for b in bullets {
                let _ = writeln!(out, "<li>{}</li>", escape_text(b));
            }
            let _ = writeln!(out, "</ul>");
        }
        SectionBody::Chart { svg, caption } => {
            let _ = writeln!(out, "<figure>");
            out.push_str(svg);
            let _ = writeln!(out, "<figcaption>{}</figcaption>", escape_text(caption));
            let _ = writeln!(out, "</figure>");
        }
        SectionBody::Notice(text) => {
            let _ = writeln!(out, "<p class=\"notice\">{}</p>", escape_text(text));
        }
    }
    let _ = writeln!(out, "</section>");
}

fn section_class(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Background => "background",
        SectionKind::InterventionEffect => "effect",
        SectionKind::Chart => "chart",
        SectionKind::Conclusion => "conclusion",
    }
}

fn inline_css() -> &'static str {
    "@page { size: letter; margin: 20mm; } \
     body { font-family: 'NanumGothic', 'Malgun Gothic', 'AppleGothic', sans-serif; color: #2d3748; margin: 0; } \
     .banner { background: #667eea; color: #ffffff; text-align: center; padding: 16px 0; } \
     .banner h1 { font-size: 18pt; margin: 0; } \
     section { padding: 0 70px; page-break-after: always; } \
     section:last-of-type { page-break-after: auto; } \
     h2 { font-size: 16pt; margin-top: 28px; } \
     p, li { font-size: 10pt; line-height: 1.5; } \
     .notice { color: #c53030; } \
     figure svg { max-width: 100%; height: auto; }"
}
