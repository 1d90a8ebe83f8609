use serde::{Deserialize, Serialize};

use crate::models::{Conf, PrintProfile};
use crate::pdf::liner::Liner;
use crate::utils::prepare_lines;

// 浮点比较容差
const EPSILON: f64 = 1e-9;

/// 绘制指令，坐标单位为英寸，`y` 为文字顶端，页码从 1 开始
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub page: usize,
}

/// 分页排版结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub commands: Vec<DrawCommand>,
    pub page_count: usize,
    pub line_height: f64,
}

/// 当前页与纵向游标，只在一次排版过程中存在
#[derive(Debug)]
struct PageCursor {
    page: usize,
    row: usize,
}

/// 分页排版引擎
pub struct LayoutEngine {
    profile: PrintProfile,
    tab_width: usize,
    liner: Liner,
}

impl LayoutEngine {
    pub fn new(config: &Conf) -> Self {
        Self {
            profile: config.print_profile.clone(),
            tab_width: config.tab_width,
            liner: Liner::from_profile(&config.print_profile),
        }
    }

    pub fn profile(&self) -> &PrintProfile {
        &self.profile
    }

    pub fn liner(&self) -> &Liner {
        &self.liner
    }

    /// 排版
    ///
    /// 每个子行画之前检查是否会越过下边距，越过则先换页再画。
    /// 空子行画成一个空格，保证空行也占一行。页面上已有内容时才换页。
    pub fn layout(&self, buffer: &str) -> PageLayout {
        let line_height = self.profile.line_height();
        let top = self.profile.margins.top;
        let left = self.profile.margins.left;
        let limit = self.profile.bottom_limit();

        let mut cursor = PageCursor { page: 1, row: 0 };
        let mut commands = Vec::new();

        for line in prepare_lines(buffer, self.tab_width) {
            for sub_line in self.liner.wrap_line(&line) {
                // y 由行号算出，避免累加误差
                let mut y = top + cursor.row as f64 * line_height;
                if cursor.row > 0 && y + line_height > limit + EPSILON {
                    cursor.page += 1;
                    cursor.row = 0;
                    y = top;
                    log::trace!("换页: 第 {} 页", cursor.page);
                }

                let text = if sub_line.is_empty() {
                    " ".to_string()
                } else {
                    sub_line
                };
                commands.push(DrawCommand {
                    text,
                    x: left,
                    y,
                    page: cursor.page,
                });
                cursor.row += 1;
            }
        }

        log::debug!("排版完成: {} 行, {} 页", commands.len(), cursor.page);

        PageLayout {
            commands,
            page_count: cursor.page,
            line_height,
        }
    }
}
