//! Tera templates for the certificate documents.
//!
//! Both are registered with `.html` names so Tera auto-escapes every user value.
//! `print.html` includes `certificate.html` and shares its context.

pub const CERTIFICATE_TEMPLATE_NAME: &str = "certificate.html";
pub const PRINT_TEMPLATE_NAME: &str = "print.html";

pub const CERTIFICATE_TEMPLATE: &str = r#"<div class="certificate-container" data-certificate-id="{{ certificate_id }}" style="box-sizing: border-box; width: {{ width_px }}px; aspect-ratio: 1.414 / 1; padding: {{ padding_px }}px; border: {{ border_px }}px solid #1e3a8a; background: #ffffff; display: flex; flex-direction: column; justify-content: center; align-items: center; row-gap: 16px; font-family: {{ body_font }};">
  <div style="text-align: center;">
    <h1 class="college-name" style="margin: 0; font-weight: 700; color: #1e3a8a; white-space: nowrap; font-family: {{ college.font }};{% if college.fit %} {{ college.fit }};{% endif %}">{{ college.text }}</h1>
    <p style="margin: 8px 0 0; font-size: 18px; color: #4b5563;">presents this</p>
  </div>
  <div style="text-align: center;">
    <h2 class="certificate-type" style="margin: 0; font-size: 30px; font-weight: 600; color: #d97706; letter-spacing: 0.05em;">{{ certificate_type }}</h2>
  </div>
  <div style="text-align: center;">
    <p style="margin: 0 0 8px; color: #374151;">This certificate is proudly presented to</p>
    <p class="student-name" style="margin: 0; font-weight: 700; color: #1e3a8a; white-space: nowrap; font-family: {{ student.font }};{% if student.fit %} {{ student.fit }};{% endif %}">{{ student.text }}</p>
    <p style="margin: 12px 0 0; color: #374151;">for their valuable contribution and active participation in the</p>
    <p class="event-name" style="margin: 8px 0 0; font-weight: 600; color: #1f2937; white-space: nowrap; font-family: {{ event.font }};{% if event.fit %} {{ event.fit }};{% endif %}">{{ event.text }}</p>
    <p style="margin: 4px 0 0; color: #374151;">held on {{ held_on }}.</p>
  </div>
  <div style="display: flex; justify-content: space-between; align-items: flex-end; width: 100%; margin-top: auto; padding-top: 24px;">
    {% for signer in signatories %}
    <div class="signatory" style="text-align: center;">
      {% if signer.signature %}<img src="{{ signer.signature }}" alt="{{ signer.role }} Signature" style="height: 56px; display: block; margin: 0 auto;">{% endif %}
      <p style="margin: 8px 0 0; padding: 4px 32px 0; border-top: 2px solid #4b5563; font-weight: 600; font-size: 14px;">{{ signer.name }}</p>
      <p style="margin: 0; font-size: 12px; color: #4b5563;">{{ signer.title }}</p>
    </div>
    {% endfor %}
  </div>
</div>"#;

pub const PRINT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Print Certificate</title>
<style>
  @media print {
    @page { size: landscape; margin: 0; }
    body { margin: 0; -webkit-print-color-adjust: exact; print-color-adjust: exact; color-adjust: exact; }
    .certificate-container { page-break-after: always; display: flex !important; }
  }
</style>
</head>
<body>
{% include "certificate.html" %}
</body>
</html>
"#;
