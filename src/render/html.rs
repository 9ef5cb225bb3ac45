//! HTML email rendering. The layout mirrors the production template: header
//! with sign and favorability, panchang grid, prediction text, lucky grid,
//! remedy list and a blessing footer.

use chrono::NaiveDate;

use crate::astro::generator::{self, PredictionResult};
use crate::astro::sign::Sign;
use crate::domain::model::{RenderedEmail, Subscriber};

const STYLE: &str = r#"
        body { font-family: Arial, sans-serif; background-color: #f5f5f5; margin: 0; padding: 0; }
        .container { max-width: 650px; margin: 20px auto; background: white; padding: 0; border-radius: 12px; box-shadow: 0 4px 20px rgba(0,0,0,0.15); overflow: hidden; }
        .header { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 30px 20px; text-align: center; }
        .header h1 { margin: 0; font-size: 32px; text-shadow: 2px 2px 4px rgba(0,0,0,0.2); }
        .sign-name { font-size: 36px; font-weight: bold; margin: 15px 0 10px 0; }
        .date { font-size: 16px; opacity: 0.95; }
        .favorability { display: inline-block; margin-top: 10px; padding: 8px 20px; background: rgba(255,255,255,0.2); border-radius: 20px; font-weight: bold; }
        .content { padding: 30px; }
        .greeting { font-size: 20px; color: #333; margin-bottom: 20px; }
        .panchang { background: #fff9e6; padding: 20px; border-radius: 10px; margin-bottom: 25px; border-left: 5px solid #ffc107; }
        .panchang h3 { margin: 0 0 15px 0; color: #f57c00; font-size: 20px; }
        .panchang-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 12px; }
        .panchang-item { background: white; padding: 12px; border-radius: 6px; }
        .panchang-label { font-size: 13px; color: #666; margin-bottom: 5px; }
        .panchang-value { font-size: 16px; font-weight: bold; color: #333; }
        .section { margin: 25px 0; padding: 20px; background: #f8f9fa; border-radius: 10px; }
        .section-title { color: #667eea; font-weight: bold; font-size: 20px; margin-bottom: 15px; display: flex; align-items: center; }
        .section-title::before { content: ''; width: 4px; height: 24px; background: #667eea; margin-right: 10px; border-radius: 2px; }
        .prediction { font-size: 17px; line-height: 1.8; color: #333; text-align: justify; }
        .lucky-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 12px; margin-top: 15px; }
        .lucky-item { background: linear-gradient(135deg, #e3f2fd 0%, #f3e5f5 100%); padding: 15px; border-radius: 10px; text-align: center; }
        .lucky-label { font-size: 13px; color: #666; margin-bottom: 5px; }
        .lucky-value { font-size: 18px; font-weight: bold; color: #1976d2; }
        .remedies { list-style: none; padding: 0; margin: 0; }
        .remedies li { padding: 15px; margin: 10px 0; background: linear-gradient(to right, #fff3e0 0%, #ffe0b2 100%); border-left: 4px solid #ff9800; border-radius: 6px; display: flex; align-items: start; }
        .remedies li::before { content: '🔸'; margin-right: 10px; font-size: 18px; }
        .footer { text-align: center; padding: 30px; background: #f8f9fa; border-top: 2px solid #e0e0e0; }
        .footer p { margin: 10px 0; color: #666; }
        .footer .blessing { font-size: 20px; color: #667eea; font-weight: bold; }
        @media (max-width: 600px) {
            .lucky-grid { grid-template-columns: 1fr; }
            .panchang-grid { grid-template-columns: 1fr; }
        }
"#;

/// "🌟 11-01-2024 - Daily Horoscope - Taurus" style subject.
pub fn subject_line(sign: Sign, date: NaiveDate) -> String {
    format!(
        "🌟 {} - Daily Horoscope - {}",
        date.format("%d-%m-%Y"),
        sign
    )
}

/// Full HTML body for one subscriber's daily reading.
pub fn email_body(name: &str, sign: Sign, date: NaiveDate) -> String {
    let result = generator::generate(sign, date);
    let panchang = &result.panchang;

    let mut html = format!(
        r#"<html>
<head>
    <meta charset="UTF-8">
    <style>{style}</style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>🌟 Daily Horoscope 🌟</h1>
            <div class="sign-name">{sign}</div>
            <div class="date">{date} | {weekday}</div>
            <div class="favorability">Day's nature: {favorability}</div>
        </div>

        <div class="content">
            <p class="greeting">Namaskaram {name},</p>

            <div class="panchang">
                <h3>📅 Today's Panchang</h3>
                <div class="panchang-grid">
                    <div class="panchang-item">
                        <div class="panchang-label">Tithi</div>
                        <div class="panchang-value">{tithi}</div>
                    </div>
                    <div class="panchang-item">
                        <div class="panchang-label">Nakshatra</div>
                        <div class="panchang-value">{nakshatra}</div>
                    </div>
                    <div class="panchang-item">
                        <div class="panchang-label">Weekday</div>
                        <div class="panchang-value">{weekday}</div>
                    </div>
                    <div class="panchang-item">
                        <div class="panchang-label">Moon Phase</div>
                        <div class="panchang-value">{moon_phase}</div>
                    </div>
                </div>
            </div>

            <div class="section">
                <div class="section-title">📖 Today's Prediction</div>
                <p class="prediction">{prediction}</p>
            </div>

            <div class="section">
                <div class="section-title">✨ Lucky Signs</div>
                <div class="lucky-grid">
                    <div class="lucky-item">
                        <div class="lucky-label">🎨 Color</div>
                        <div class="lucky-value">{lucky_color}</div>
                    </div>
                    <div class="lucky-item">
                        <div class="lucky-label">🔢 Number</div>
                        <div class="lucky-value">{lucky_number}</div>
                    </div>
                    <div class="lucky-item">
                        <div class="lucky-label">⏰ Time</div>
                        <div class="lucky-value">{lucky_time}</div>
                    </div>
                    <div class="lucky-item">
                        <div class="lucky-label">🧭 Direction</div>
                        <div class="lucky-value">{lucky_direction}</div>
                    </div>
                </div>
            </div>

            <div class="section">
                <div class="section-title">🙏 Today's Remedies</div>
                <ul class="remedies">
"#,
        style = STYLE,
        sign = sign,
        date = date.format("%d-%m-%Y"),
        weekday = panchang.weekday,
        favorability = result.favorability,
        name = name,
        tithi = panchang.tithi,
        nakshatra = panchang.nakshatra,
        moon_phase = panchang.moon_phase,
        prediction = result.prediction,
        lucky_color = result.lucky_color,
        lucky_number = result.lucky_number,
        lucky_time = result.lucky_time,
        lucky_direction = result.lucky_direction,
    );

    for remedy in &result.remedies {
        html.push_str(&format!("                    <li>{}</li>\n", remedy));
    }

    html.push_str(
        r#"                </ul>
            </div>
        </div>

        <div class="footer">
            <p class="blessing">Shubhodayam! Wishing you an auspicious day 🌺</p>
            <p style="margin-top: 15px; font-size: 13px; color: #999;">
                <em>These predictions change daily with the panchang and planetary positions.<br/>
                Consult an experienced astrologer for a personal reading.</em>
            </p>
        </div>
    </div>
</body>
</html>
"#,
    );

    html
}

/// Compact text rendering of a reading, used by the preview tool.
pub fn plain_text(sign: Sign, date: NaiveDate) -> String {
    let result = generator::generate(sign, date);
    plain_text_from(&result, sign, date)
}

fn plain_text_from(result: &PredictionResult, sign: Sign, date: NaiveDate) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "🌟 {} - {} ({})\n",
        sign,
        date.format("%d-%m-%Y"),
        result.panchang.weekday
    ));
    out.push_str(&format!("Day's nature: {}\n\n", result.favorability));
    out.push_str(&format!("Tithi:      {}\n", result.panchang.tithi));
    out.push_str(&format!("Nakshatra:  {}\n", result.panchang.nakshatra));
    out.push_str(&format!("Moon phase: {}\n\n", result.panchang.moon_phase));
    out.push_str(&format!("{}\n\n", result.prediction));
    out.push_str(&format!(
        "Lucky: {} | {} | {} | {}\n",
        result.lucky_color, result.lucky_number, result.lucky_time, result.lucky_direction
    ));
    out.push_str("Remedies:\n");
    for remedy in &result.remedies {
        out.push_str(&format!("  🔸 {}\n", remedy));
    }
    out
}

/// One deliverable email for a subscriber.
pub fn render_email(subscriber: &Subscriber, sign: Sign, date: NaiveDate) -> RenderedEmail {
    RenderedEmail {
        recipient: subscriber.email.clone(),
        subject: subject_line(sign, date),
        html: email_body(&subscriber.name, sign, date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_subject_line_format() {
        assert_eq!(
            subject_line(Sign::Taurus, date(2024, 1, 11)),
            "🌟 11-01-2024 - Daily Horoscope - Taurus"
        );
    }

    #[test]
    fn test_email_body_carries_all_sections() {
        let html = email_body("Ravi", Sign::Taurus, date(2024, 1, 11));

        assert!(html.contains("Namaskaram Ravi,"));
        assert!(html.contains(">Taurus</div>"));
        assert!(html.contains("11-01-2024 | Thursday"));
        assert!(html.contains("Shukla Paksha Padyami"));
        assert!(html.contains("Chitta"));
        assert!(html.contains("Amavasya (New Moon)"));
        assert!(html.contains("📅 Today's Panchang"));
        assert!(html.contains("📖 Today's Prediction"));
        assert!(html.contains("✨ Lucky Signs"));
        assert!(html.contains("🙏 Today's Remedies"));
        assert!(html.contains("Shubhodayam!"));
    }

    #[test]
    fn test_email_body_lists_every_remedy() {
        let result = generator::generate(Sign::Taurus, date(2024, 1, 11));
        let html = email_body("Ravi", Sign::Taurus, date(2024, 1, 11));
        for remedy in &result.remedies {
            assert!(html.contains(remedy.as_str()), "missing remedy {remedy}");
        }
        assert_eq!(html.matches("<li>").count(), result.remedies.len());
    }

    #[test]
    fn test_render_email_addresses_the_subscriber() {
        let subscriber = Subscriber {
            name: "Lakshmi".to_string(),
            email: "lakshmi@example.com".to_string(),
            sign: "Leo".to_string(),
        };
        let email = render_email(&subscriber, Sign::Leo, date(2024, 1, 18));

        assert_eq!(email.recipient, "lakshmi@example.com");
        assert_eq!(email.subject, "🌟 18-01-2024 - Daily Horoscope - Leo");
        assert!(email.html.contains("Namaskaram Lakshmi,"));
    }

    #[test]
    fn test_plain_text_preview() {
        let text = plain_text(Sign::Leo, date(2024, 1, 18));
        assert!(text.starts_with("🌟 Leo - 18-01-2024 (Thursday)"));
        assert!(text.contains("Pournami (Full Moon)"));
        assert!(text.contains("Remedies:"));
    }
}
