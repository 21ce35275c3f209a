use crate::settings::WidgetTemplate;

/// Rules for the buy card, placed in the page's `<style>` block.
pub const BUY_CSS: &str = "
    .buy-section { margin-top: 1.5rem; padding: 1.5rem; background: rgba(100, 200, 100, 0.05); border: 1px solid rgba(100, 200, 100, 0.2); border-radius: 8px; }
    .buy-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; }
    .buy-price { font-size: 1.5rem; font-weight: 600; color: #80c0a0; }
    .buy-network { font-size: 0.75rem; padding: 0.25rem 0.5rem; background: rgba(100, 200, 100, 0.1); border-radius: 2px; color: var(--muted); }
    .buy-btn { width: 100%; display: flex; align-items: center; justify-content: center; gap: 0.5rem; padding: 1rem; background: rgba(100, 200, 100, 0.15); border: 1px solid rgba(100, 200, 100, 0.4); border-radius: 4px; color: #80c0a0; font-size: 1rem; font-weight: 500; cursor: pointer; transition: all 0.3s; font-family: inherit; }
    .buy-btn:hover { background: rgba(100, 200, 100, 0.25); border-color: rgba(100, 200, 100, 0.6); }
    .buy-info { margin-top: 0.75rem; font-size: 0.7rem; color: var(--muted); text-align: center; }
    .buy-info code { background: rgba(255,255,255,0.05); padding: 0.1rem 0.3rem; border-radius: 2px; font-size: 0.65rem; }";

/// Markup that replaces the description close / details open adjacency.
/// Starts with `</p>` and ends with `<div class="details">`; the love button
/// moves up here from the bottom of the page.
pub fn render(template: &WidgetTemplate, id: &str) -> String {
    format!(
        r#"</p>
        
        <div class="buy-section">
          <div class="buy-header">
            <span class="buy-price">{price}</span>
            <span class="buy-network">{network}</span>
          </div>
          <button class="buy-btn" id="buy-btn">
            <span>⚡</span>
            <span>{label}</span>
          </button>
          <p class="buy-info">Agents: <code>GET {api_path}</code></p>
        </div>
        
        <div class="love-section" style="margin-top: 1.5rem; border-top: none; padding-top: 0;">
          <button class="love-btn" id="love-btn">
            <span class="heart">♡</span>
            <span class="love-count" id="love-count">0</span>
          </button>
          <span class="love-label">Show some love</span>
        </div>
        
        <div class="details">"#,
        price = template.price,
        network = template.network,
        label = template.button_label,
        api_path = template.api_path_for(id),
    )
}

// ── Tests ──
