//! 极简 PDF 输出：内置 Courier 字体，只画文字
//!
//! 坐标换算：排版结果以英寸、左上角为原点；PDF 以磅、左下角为原点。

use crate::models::PrintProfile;
use crate::pdf::layout::PageLayout;

/// Courier 字形上沿约为 0.8em
const ASCENT_RATIO: f64 = 0.8;

fn convert_inches_to_point(inches: f64) -> f64 {
    inches * 72.0
}

/// 转成 WinAnsi 字节并转义 PDF 字符串中的特殊字符
fn encode_pdf_string(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() + 2);
    out.push(b'(');
    for c in text.chars() {
        match c {
            '(' | ')' | '\\' => {
                out.push(b'\\');
                out.push(c as u8);
            }
            c if (c as u32) < 0x20 => out.push(b' '),
            c if (c as u32) <= 0xFF => out.push(c as u32 as u8),
            _ => out.push(b'?'),
        }
    }
    out.push(b')');
    out
}

/// 生成单页内容流
fn page_content(layout: &PageLayout, page: usize, profile: &PrintProfile) -> Vec<u8> {
    let mut content = format!("BT\n/F1 {} Tf\n", profile.font_size).into_bytes();
    for cmd in layout.commands.iter().filter(|c| c.page == page) {
        let x = convert_inches_to_point(cmd.x);
        let baseline = convert_inches_to_point(profile.page_height - cmd.y)
            - profile.font_size * ASCENT_RATIO;
        content.extend_from_slice(format!("1 0 0 1 {:.2} {:.2} Tm\n", x, baseline).as_bytes());
        content.extend(encode_pdf_string(&cmd.text));
        content.extend_from_slice(b" Tj\n");
    }
    content.extend_from_slice(b"ET\n");
    content
}

/// 把排版结果写成 PDF 字节
pub fn render_pdf(layout: &PageLayout, profile: &PrintProfile) -> Vec<u8> {
    let page_count = layout.page_count.max(1);
    let width = convert_inches_to_point(profile.page_width);
    let height = convert_inches_to_point(profile.page_height);

    // 对象编号：1 目录，2 页树，3 字体，之后每页两个对象（页面、内容流）
    let mut objects: Vec<Vec<u8>> = Vec::new();
    let kids: Vec<String> = (0..page_count)
        .map(|i| format!("{} 0 R", 4 + i * 2))
        .collect();

    objects.push(b"<< /Type /Catalog /Pages 2 0 R >>".to_vec());
    objects.push(
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            page_count
        )
        .into_bytes(),
    );
    objects.push(
        format!(
            "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
            profile.font_family
        )
        .into_bytes(),
    );

    for page in 1..=page_count {
        let content_id = 5 + (page - 1) * 2;
        objects.push(
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
                width, height, content_id
            )
            .into_bytes(),
        );

        let content = page_content(layout, page, profile);
        let mut stream = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
        stream.extend(content);
        stream.extend_from_slice(b"endstream");
        objects.push(stream);
    }

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n", i + 1).as_bytes());
        pdf.extend_from_slice(body);
        pdf.extend_from_slice(b"\nendobj\n");
    }

    let xref_offset = pdf.len();
    pdf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    pdf.extend_from_slice(b"0000000000 65535 f \n");
    for offset in offsets {
        pdf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    pdf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );
    pdf
}
