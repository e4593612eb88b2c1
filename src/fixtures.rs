//! Hard-coded fixture data standing in for a real discovery pipeline.
//! Everything here is immutable after construction; the view layer and the
//! dashboard page derive from it, never write to it.

use crate::types::{
    Complexity, Demand, MarketSize, PricingBucket, QuickFilter, Scores, SourceShare,
    TechnicalFeasibility, ToolType, TrendPoint, UserProfile,
};

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The five simulated demand records.
pub fn mock_demands() -> Vec<Demand> {
    vec![
        Demand {
            id: "TOOL-001".into(),
            title: "自动将Google Sheets数据同步到Notion".into(),
            description: "用户需要将Google Sheets中的数据自动同步到Notion数据库，避免手动复制粘贴".into(),
            problem: "每周需要花费2-3小时手动同步数据，容易出错且耗时".into(),
            user_profile: UserProfile {
                role: "项目经理/运营人员".into(),
                company_size: "中小团队(5-20人)".into(),
                tech_level: "非技术用户".into(),
                budget: "$10-30/月".into(),
            },
            scenario: "每周报告同步、跨团队数据共享、实时仪表板更新".into(),
            pain_points: strs(&[
                "手动复制粘贴耗时",
                "Zapier太复杂难配置",
                "现有插件功能有限",
                "数据不同步导致决策延迟",
            ]),
            existing_solutions: strs(&["Zapier（太复杂）", "手动复制粘贴", "简单的Google Apps Script"]),
            pricing_signals: strs(&[
                "I'd pay $20/month for reliable sync",
                "Current solution costs $50 but overkill",
                "Wasting 2 hours weekly on this",
            ]),
            market_size: MarketSize {
                search_volume: 1200,
                competitor_users: 5000,
                growth_rate: 25.0,
            },
            technical_feasibility: TechnicalFeasibility {
                complexity: Complexity::Medium,
                dev_time: "2-3周".into(),
                main_tech: strs(&["Google Sheets API", "Notion API", "Node.js"]),
            },
            scores: Scores {
                demand_strength: 9.0,
                market_size: 8.0,
                willingness_to_pay: 8.0,
                technical_feasibility: 7.0,
                passive_income_fit: 9.0,
                overall: 8.5,
            },
            recommended_pricing: "$15-25/month".into(),
            mvp_features: strs(&["双向同步", "定时任务", "错误处理", "简单配置界面"]),
            source: "Reddit r/SideProject".into(),
            discovered_at: "2024-02-14".into(),
            tags: strs(&["自动化", "数据同步", "办公效率", "团队协作"]),
        },
        Demand {
            id: "TOOL-002".into(),
            title: "Shopify店铺竞品价格监控".into(),
            description: "自动监控竞争对手Shopify店铺的价格变化，及时调整定价策略".into(),
            problem: "手动检查竞品价格耗时且不及时，错过最佳调价时机".into(),
            user_profile: UserProfile {
                role: "电商运营/店主".into(),
                company_size: "个人卖家或小团队".into(),
                tech_level: "基础技术能力".into(),
                budget: "$15-40/月".into(),
            },
            scenario: "日常价格监控、促销活动跟踪、市场定价分析".into(),
            pain_points: strs(&[
                "每天手动检查多个店铺",
                "价格变化通知不及时",
                "无法跟踪历史价格趋势",
                "错过调价最佳时机",
            ]),
            existing_solutions: strs(&["手动检查", "价格监控服务（太贵）", "简单的爬虫脚本"]),
            pricing_signals: strs(&[
                "Would pay $30/month for accurate monitoring",
                "Losing sales due to price mismatch",
                "Current tools start at $99/month",
            ]),
            market_size: MarketSize {
                search_volume: 1800,
                competitor_users: 8000,
                growth_rate: 35.0,
            },
            technical_feasibility: TechnicalFeasibility {
                complexity: Complexity::Medium,
                dev_time: "3-4周".into(),
                main_tech: strs(&["Shopify API", "Web Scraping", "React", "Node.js"]),
            },
            scores: Scores {
                demand_strength: 8.0,
                market_size: 9.0,
                willingness_to_pay: 9.0,
                technical_feasibility: 6.0,
                passive_income_fit: 8.0,
                overall: 8.2,
            },
            recommended_pricing: "$20-35/month".into(),
            mvp_features: strs(&["竞品价格监控", "价格变化警报", "历史趋势图表", "简单仪表板"]),
            source: "Shopify社区论坛".into(),
            discovered_at: "2024-02-13".into(),
            tags: strs(&["电商", "价格监控", "竞争分析", "Shopify"]),
        },
        Demand {
            id: "TOOL-003".into(),
            title: "AI生成社交媒体帖子配图".into(),
            description: "根据社交媒体帖子内容自动生成匹配的配图，提高内容吸引力".into(),
            problem: "为每个帖子找配图耗时，图片质量参差不齐，风格不统一".into(),
            user_profile: UserProfile {
                role: "社交媒体经理/内容创作者".into(),
                company_size: "个人或小团队".into(),
                tech_level: "非技术用户".into(),
                budget: "$12-25/月".into(),
            },
            scenario: "日常社交媒体发布、内容营销、品牌一致性维护".into(),
            pain_points: strs(&[
                "找图耗时（每帖15-30分钟）",
                "图片版权问题",
                "风格不一致",
                "图片与内容不匹配",
            ]),
            existing_solutions: strs(&[
                "Canva（手动操作）",
                "Unsplash搜索",
                "AI图像生成工具（需手动调整）",
            ]),
            pricing_signals: strs(&[
                "Spend 10+ hours monthly on images",
                "Would pay $20 for consistent branding",
                "Current tools lack automation",
            ]),
            market_size: MarketSize {
                search_volume: 2500,
                competitor_users: 12000,
                growth_rate: 40.0,
            },
            technical_feasibility: TechnicalFeasibility {
                complexity: Complexity::High,
                dev_time: "4-6周".into(),
                main_tech: strs(&["OpenAI API", "Stable Diffusion", "React", "Node.js"]),
            },
            scores: Scores {
                demand_strength: 9.0,
                market_size: 9.0,
                willingness_to_pay: 7.0,
                technical_feasibility: 5.0,
                passive_income_fit: 8.0,
                overall: 7.8,
            },
            recommended_pricing: "$15-30/month".into(),
            mvp_features: strs(&["文本到图像生成", "品牌风格学习", "批量处理", "简单编辑器"]),
            source: "Twitter营销社区".into(),
            discovered_at: "2024-02-12".into(),
            tags: strs(&["AI", "社交媒体", "内容创作", "自动化"]),
        },
        Demand {
            id: "TOOL-004".into(),
            title: "Chrome扩展：网页内容一键保存到Notion".into(),
            description: "浏览网页时一键将内容保存到指定的Notion页面或数据库".into(),
            problem: "收藏了大量网页但难以整理，信息分散在不同地方".into(),
            user_profile: UserProfile {
                role: "研究人员/学生/知识工作者".into(),
                company_size: "个人使用".into(),
                tech_level: "普通用户".into(),
                budget: "$5-15/月".into(),
            },
            scenario: "研究资料收集、内容灵感保存、知识管理".into(),
            pain_points: strs(&[
                "书签难以管理",
                "内容分散在不同工具",
                "无法添加笔记和标签",
                "搜索困难",
            ]),
            existing_solutions: strs(&["浏览器书签", "Pocket/Instapaper", "手动复制到Notion"]),
            pricing_signals: strs(&[
                "Would pay $10 for seamless saving",
                "Currently using free but limited tools",
                "Saves 1+ hour weekly",
            ]),
            market_size: MarketSize {
                search_volume: 3200,
                competitor_users: 15000,
                growth_rate: 30.0,
            },
            technical_feasibility: TechnicalFeasibility {
                complexity: Complexity::Low,
                dev_time: "1-2周".into(),
                main_tech: strs(&["Chrome Extension API", "Notion API", "JavaScript"]),
            },
            scores: Scores {
                demand_strength: 8.0,
                market_size: 9.0,
                willingness_to_pay: 6.0,
                technical_feasibility: 9.0,
                passive_income_fit: 9.0,
                overall: 8.4,
            },
            recommended_pricing: "$8-12/month".into(),
            mvp_features: strs(&["一键保存", "标签分类", "笔记添加", "搜索功能"]),
            source: "Chrome Web Store评论".into(),
            discovered_at: "2024-02-11".into(),
            tags: strs(&["浏览器扩展", "知识管理", "生产力", "Notion"]),
        },
        Demand {
            id: "TOOL-005".into(),
            title: "Slack机器人：自动生成会议纪要".into(),
            description: "在Slack会议频道中自动记录讨论要点并生成会议纪要".into(),
            problem: "会议记录耗时且容易遗漏重要信息，后续难以查找".into(),
            user_profile: UserProfile {
                role: "团队负责人/项目经理".into(),
                company_size: "中小团队(10-50人)".into(),
                tech_level: "非技术用户".into(),
                budget: "$20-50/月（团队）".into(),
            },
            scenario: "团队日常会议、项目讨论、决策记录".into(),
            pain_points: strs(&["专人记录耗时", "信息遗漏", "后续查找困难", "行动项跟踪缺失"]),
            existing_solutions: strs(&["手动记录", "录音转文字服务", "专门的会议工具"]),
            pricing_signals: strs(&[
                "Team would pay $40/month",
                "Saves 5+ hours weekly",
                "Better than $99/month alternatives",
            ]),
            market_size: MarketSize {
                search_volume: 1500,
                competitor_users: 6000,
                growth_rate: 28.0,
            },
            technical_feasibility: TechnicalFeasibility {
                complexity: Complexity::Medium,
                dev_time: "3-4周".into(),
                main_tech: strs(&["Slack API", "OpenAI API", "Node.js"]),
            },
            scores: Scores {
                demand_strength: 7.0,
                market_size: 8.0,
                willingness_to_pay: 8.0,
                technical_feasibility: 7.0,
                passive_income_fit: 8.0,
                overall: 7.8,
            },
            recommended_pricing: "$30-45/month（团队）".into(),
            mvp_features: strs(&["自动记录", "要点提取", "行动项识别", "搜索功能"]),
            source: "Slack社区".into(),
            discovered_at: "2024-02-10".into(),
            tags: strs(&["Slack", "会议效率", "团队协作", "AI"]),
        },
    ]
}

/// Monthly discovery counts for the trend chart.
pub fn trends_data() -> Vec<TrendPoint> {
    let points = [
        ("1月", 120, 15),
        ("2月", 145, 22),
        ("3月", 168, 28),
        ("4月", 192, 35),
        ("5月", 210, 42),
        ("6月", 235, 48),
    ];
    points
        .into_iter()
        .map(|(month, demand_count, high_potential)| TrendPoint {
            month: month.into(),
            demand_count,
            high_potential,
        })
        .collect()
}

/// Share of demands per discovery source. Values are percentages.
pub fn source_distribution() -> Vec<SourceShare> {
    let shares = [
        ("Reddit", 35.0),
        ("Product Hunt", 25.0),
        ("Chrome Store", 20.0),
        ("Twitter", 15.0),
        ("其他", 5.0),
    ];
    shares
        .into_iter()
        .map(|(name, value)| SourceShare {
            name: name.into(),
            value,
        })
        .collect()
}

/// Recommended-pricing histogram buckets.
pub fn pricing_distribution() -> Vec<PricingBucket> {
    let buckets = [("$5-10", 22), ("$10-20", 31), ("$20-50", 18), ("$50+", 8)];
    buckets
        .into_iter()
        .map(|(range, count)| PricingBucket {
            range: range.into(),
            count,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Sidebar fixtures
// ---------------------------------------------------------------------------

pub fn quick_filters() -> Vec<QuickFilter> {
    let filters = [
        ("高评分需求", 24),
        ("高付费意愿", 18),
        ("技术可行", 32),
        ("团队工具", 15),
        ("近期热门", 12),
    ];
    filters
        .into_iter()
        .map(|(label, count)| QuickFilter {
            label: label.into(),
            count,
        })
        .collect()
}

pub fn tool_types() -> Vec<ToolType> {
    let types = [
        ("浏览器扩展", 28),
        ("API服务", 19),
        ("Chrome插件", 24),
        ("Shopify应用", 16),
        ("Slack机器人", 11),
        ("CLI工具", 9),
        ("微信小程序", 7),
        ("移动应用", 5),
    ];
    types
        .into_iter()
        .map(|(name, count)| ToolType {
            name: name.into(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_demands_with_unique_ids() {
        let demands = mock_demands();
        assert_eq!(demands.len(), 5);
        let mut ids: Vec<&str> = demands.iter().map(|d| d.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn source_shares_sum_to_one_hundred() {
        let total: f64 = source_distribution().iter().map(|s| s.value).sum();
        assert!((total - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn pricing_buckets_match_authored_counts() {
        let buckets = pricing_distribution();
        assert_eq!(buckets.len(), 4);
        assert_eq!(buckets[0].range, "$5-10");
        assert_eq!(buckets[0].count, 22);
        assert_eq!(buckets[3].count, 8);
    }
}
