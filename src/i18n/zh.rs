//! Chinese translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "烹饪任务");
    m.insert(Key::AppCaption, "烹饪任务");

    // Summary
    m.insert(Key::SummaryHealthy, "健康");

    // Description
    m.insert(Key::ViewDetails, "查看详情");

    // Detail page
    m.insert(Key::DetailBack, "返回");
    m.insert(Key::DetailComingSoon, "详细步骤即将上线。");

    // Startup
    m.insert(Key::Loading, "正在加载食谱...");
    m.insert(Key::LoadFailedTitle, "无法加载食谱");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
