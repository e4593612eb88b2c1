//! Server-rendered dashboard page.
//!
//! Produces one self-contained HTML document with inline CSS from a
//! `DashboardView`. No client-side state; every request re-renders from the
//! same fixture-derived view.

use axum::response::Html;

use crate::config::SYSTEM_NAME;
use crate::dashboard::view_model::{DashboardView, DemandCard, PricingBar, SourceBar, StatTile};
use crate::types::{QuickFilter, ToolType, TrendPoint};

/// `GET /` handler.
pub async fn page() -> Html<String> {
    Html(render_page(&DashboardView::build()))
}

/// Render the full dashboard document.
pub fn render_page(view: &DashboardView) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="zh">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title} - 出海工具需求挖掘系统</title>
  <style>{css}</style>
</head>
<body>
  <div class="layout">
    {sidebar}
    <main class="content">
      {hero}
      {stats}
      {charts}
      {pricing}
      {cards}
    </main>
  </div>
</body>
</html>"#,
        title = SYSTEM_NAME,
        css = inline_css(),
        sidebar = render_sidebar(&view.quick_filters, &view.tool_types),
        hero = render_hero(),
        stats = render_stat_tiles(&view.stats),
        charts = render_charts(&view.trends, &view.sources),
        pricing = render_pricing(&view.pricing),
        cards = render_demand_cards(&view.top_demands),
    )
}

fn render_hero() -> String {
    r#"<section class="hero">
      <h1>欢迎回来！</h1>
      <p>今日系统已自动挖掘到 <b>42个</b> 新需求，其中 <b>8个</b> 为高潜力出海工具机会。</p>
    </section>"#
        .to_string()
}

fn render_stat_tiles(tiles: &[StatTile]) -> String {
    let items: String = tiles
        .iter()
        .map(|t| {
            format!(
                r#"<div class="tile tile-{color}">
              <p class="tile-title">{title}</p>
              <p class="tile-value">{value}</p>
              <p class="tile-change">{change} <span>vs 上月</span></p>
            </div>"#,
                color = t.color,
                title = t.title,
                value = t.value,
                change = t.change,
            )
        })
        .collect();
    format!(r#"<section class="tiles">{items}</section>"#)
}

fn render_charts(trends: &[TrendPoint], sources: &[SourceBar]) -> String {
    let trend_rows: String = trends
        .iter()
        .map(|t| {
            format!(
                r#"<tr><td>{month}</td><td>{count}</td><td>{high}</td></tr>"#,
                month = escape_html(&t.month),
                count = t.demand_count,
                high = t.high_potential,
            )
        })
        .collect();

    let source_rows: String = sources
        .iter()
        .map(|s| {
            format!(
                r#"<div class="bar-row">
              <span class="bar-label">{name}</span>
              <div class="bar-track"><div class="bar-fill" style="width:{width:.2}%"></div></div>
              <span class="bar-value">{width:.0}%</span>
            </div>"#,
                name = escape_html(&s.name),
                width = s.width_pct,
            )
        })
        .collect();

    format!(
        r#"<section class="charts">
      <div class="panel">
        <h2>需求增长趋势</h2>
        <table class="trend-table">
          <thead><tr><th>月份</th><th>需求数</th><th>高潜力</th></tr></thead>
          <tbody>{trend_rows}</tbody>
        </table>
      </div>
      <div class="panel">
        <h2>需求来源分布</h2>
        {source_rows}
      </div>
    </section>"#
    )
}

fn render_pricing(bars: &[PricingBar]) -> String {
    let items: String = bars
        .iter()
        .map(|b| {
            format!(
                r#"<div class="price-bucket">
              <div class="price-count">{count}</div>
              <div class="price-range">{range}</div>
              <div class="bar-track"><div class="bar-fill green" style="width:{width:.2}%"></div></div>
            </div>"#,
                count = b.count,
                range = escape_html(&b.range),
                width = b.width_pct,
            )
        })
        .collect();
    format!(
        r#"<section class="panel">
      <h2>价格区间分布</h2>
      <div class="price-grid">{items}</div>
    </section>"#
    )
}

fn render_demand_cards(cards: &[DemandCard]) -> String {
    let items: String = cards.iter().map(render_demand_card).collect();
    format!(
        r#"<section>
      <h2>今日高潜力需求</h2>
      {items}
    </section>"#
    )
}

fn render_demand_card(card: &DemandCard) -> String {
    let d = &card.demand;
    let tags: String = d
        .tags
        .iter()
        .map(|t| format!(r#"<span class="tag">{}</span>"#, escape_html(t)))
        .collect();

    format!(
        r#"<article class="card">
      <div class="card-head">
        <div>
          <span class="card-id">{id}</span>
          <span class="card-date">{date}</span>
          <h3>{title}</h3>
          <p>{description}</p>
          <div class="tags">{tags}</div>
        </div>
        <div class="score {score_class}">
          <div class="score-value">{overall:.1}</div>
          <div class="score-label">综合评分</div>
        </div>
      </div>
      <dl class="card-meta">
        <div><dt>需求强度</dt><dd>{strength:.0}/10</dd></div>
        <div><dt>市场规模</dt><dd>{market:.0}/10</dd></div>
        <div><dt>付费意愿</dt><dd>{pay:.0}/10</dd></div>
        <div><dt>技术可行</dt><dd>{feasibility:.0}/10</dd></div>
      </dl>
      <div class="card-detail">
        <div>
          <h4>用户画像</h4>
          <p>角色: {role}</p>
          <p>团队规模: {company}</p>
          <p>预算范围: {budget}</p>
        </div>
        <div>
          <h4>技术评估</h4>
          <p>开发复杂度: <span class="badge {complexity_class}">{complexity_label}</span></p>
          <p>开发时间: {dev_time}</p>
          <p>主要技术: {tech}</p>
        </div>
      </div>
      <footer class="card-foot">推荐定价 <b>{pricing}</b></footer>
    </article>"#,
        id = escape_html(&d.id),
        date = escape_html(&d.discovered_at),
        title = escape_html(&d.title),
        description = escape_html(&d.description),
        tags = tags,
        score_class = card.score_class,
        overall = d.scores.overall,
        strength = d.scores.demand_strength,
        market = d.scores.market_size,
        pay = d.scores.willingness_to_pay,
        feasibility = d.scores.technical_feasibility,
        role = escape_html(&d.user_profile.role),
        company = escape_html(&d.user_profile.company_size),
        budget = escape_html(&d.user_profile.budget),
        complexity_class = card.complexity.class,
        complexity_label = card.complexity.label,
        dev_time = escape_html(&d.technical_feasibility.dev_time),
        tech = escape_html(&d.technical_feasibility.main_tech.join(", ")),
        pricing = escape_html(&d.recommended_pricing),
    )
}

fn render_sidebar(filters: &[QuickFilter], tool_types: &[ToolType]) -> String {
    let filter_items: String = filters
        .iter()
        .map(|f| {
            format!(
                r#"<li><span>{label}</span><span class="count">{count}</span></li>"#,
                label = escape_html(&f.label),
                count = f.count,
            )
        })
        .collect();
    let type_items: String = tool_types
        .iter()
        .map(|t| {
            format!(
                r#"<li><span>{name}</span><span class="count">{count}</span></li>"#,
                name = escape_html(&t.name),
                count = t.count,
            )
        })
        .collect();
    format!(
        r#"<aside class="sidebar">
      <h2>快速筛选</h2>
      <ul>{filter_items}</ul>
      <h2>工具类型</h2>
      <ul>{type_items}</ul>
    </aside>"#
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn inline_css() -> &'static str {
    r#"
    * { box-sizing: border-box; }
    body { margin: 0; font-family: -apple-system, "Segoe UI", Arial, sans-serif; background: #f9fafb; color: #111827; }
    .layout { display: flex; min-height: 100vh; }
    .sidebar { width: 220px; background: #fff; border-right: 1px solid #e5e7eb; padding: 24px; }
    .sidebar h2 { font-size: 12px; text-transform: uppercase; color: #6b7280; letter-spacing: 0.05em; }
    .sidebar ul { list-style: none; padding: 0; margin: 0 0 24px; }
    .sidebar li { display: flex; justify-content: space-between; padding: 6px 0; font-size: 14px; }
    .sidebar .count { color: #6b7280; font-size: 12px; }
    .content { flex: 1; padding: 24px; max-width: 1100px; }
    .hero { background: linear-gradient(to right, #2563eb, #9333ea); color: #fff; border-radius: 12px; padding: 24px; margin-bottom: 24px; }
    .hero h1 { margin: 0 0 8px; font-size: 24px; }
    .tiles { display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; margin-bottom: 24px; }
    .tile { background: #fff; border: 1px solid #e5e7eb; border-radius: 12px; padding: 16px; }
    .tile-title { margin: 0; color: #6b7280; font-size: 14px; }
    .tile-value { margin: 8px 0 0; font-size: 24px; font-weight: 700; }
    .tile-change { margin: 8px 0 0; color: #16a34a; font-size: 14px; }
    .tile-change span { color: #6b7280; }
    .charts { display: grid; grid-template-columns: 1fr 1fr; gap: 24px; margin-bottom: 24px; }
    .panel { background: #fff; border: 1px solid #e5e7eb; border-radius: 12px; padding: 24px; margin-bottom: 24px; }
    .panel h2 { margin-top: 0; font-size: 18px; }
    .trend-table { width: 100%; border-collapse: collapse; font-size: 14px; }
    .trend-table th, .trend-table td { text-align: left; padding: 6px 8px; border-bottom: 1px solid #f3f4f6; }
    .bar-row { display: flex; align-items: center; gap: 12px; margin: 10px 0; font-size: 14px; }
    .bar-label { width: 110px; }
    .bar-track { flex: 1; height: 8px; background: #e5e7eb; border-radius: 4px; }
    .bar-fill { height: 100%; background: #3b82f6; border-radius: 4px; }
    .bar-fill.green { background: #22c55e; }
    .bar-value { width: 40px; text-align: right; font-weight: 500; }
    .price-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; text-align: center; }
    .price-count { font-size: 24px; font-weight: 700; }
    .price-range { color: #6b7280; font-size: 14px; margin-bottom: 8px; }
    .card { background: #fff; border: 1px solid #e5e7eb; border-radius: 12px; padding: 24px; margin-bottom: 16px; }
    .card-head { display: flex; justify-content: space-between; gap: 16px; }
    .card-id { background: #dbeafe; color: #1e40af; border-radius: 999px; padding: 3px 10px; font-size: 12px; }
    .card-date { color: #6b7280; font-size: 12px; margin-left: 8px; }
    .card h3 { margin: 10px 0 6px; font-size: 18px; }
    .tags { margin-top: 8px; }
    .tag { background: #f3f4f6; border-radius: 999px; padding: 3px 10px; font-size: 12px; margin-right: 6px; }
    .score { border-radius: 8px; color: #fff; padding: 10px 14px; text-align: center; align-self: flex-start; }
    .score-value { font-size: 24px; font-weight: 700; }
    .score-label { font-size: 12px; opacity: 0.9; }
    .score-green { background: linear-gradient(to right, #22c55e, #059669); }
    .score-blue { background: linear-gradient(to right, #3b82f6, #0891b2); }
    .score-orange { background: linear-gradient(to right, #eab308, #f97316); }
    .score-gray { background: linear-gradient(to right, #9ca3af, #4b5563); }
    .card-meta { display: grid; grid-template-columns: repeat(4, 1fr); gap: 12px; margin: 16px 0; }
    .card-meta div { background: #f9fafb; border-radius: 8px; padding: 10px; }
    .card-meta dt { color: #6b7280; font-size: 13px; }
    .card-meta dd { margin: 4px 0 0; font-weight: 600; }
    .card-detail { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; font-size: 14px; }
    .card-detail h4 { margin: 0 0 6px; }
    .badge { border-radius: 999px; padding: 2px 8px; font-size: 12px; }
    .badge-green { background: #dcfce7; color: #166534; }
    .badge-yellow { background: #fef9c3; color: #854d0e; }
    .badge-red { background: #fee2e2; color: #991b1b; }
    .badge-gray { background: #f3f4f6; color: #1f2937; }
    .card-foot { border-top: 1px solid #e5e7eb; margin-top: 16px; padding-top: 12px; color: #16a34a; }
    "#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_contains_top_demands_in_rank_order() {
        let html = render_page(&DashboardView::build());
        let first = html.find("TOOL-001").expect("top demand rendered");
        let second = html.find("TOOL-004").expect("second demand rendered");
        let third = html.find("TOOL-002").expect("third demand rendered");
        assert!(first < second && second < third);
        assert!(!html.contains("TOOL-003"), "only the top three are rendered");
    }

    #[test]
    fn page_renders_fixture_sections() {
        let html = render_page(&DashboardView::build());
        assert!(html.contains("需求来源分布"));
        assert!(html.contains("价格区间分布"));
        assert!(html.contains("Product Hunt"));
        assert!(html.contains("$10-20"));
        // 22/79 bucket width
        assert!(html.contains("width:27.85%"));
    }

    #[test]
    fn html_escaping() {
        assert_eq!(escape_html("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }
}
