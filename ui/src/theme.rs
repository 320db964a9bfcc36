pub const GLOBAL_CSS: &str = r#"
:root {
  --bg: #f8f9fc;
  --bg-elev-1: #ffffff;
  --sidebar-from: #4e73df;
  --sidebar-to: #224abe;
  --border: rgba(0, 0, 0, 0.08);
  --border-strong: rgba(0, 0, 0, 0.16);
  --text: #3a3b45;
  --text-dim: #5a5c69;
  --text-muted: #858796;
  --accent: #4e73df;
  --primary: #4e73df;
  --success: #1cc88a;
  --info: #36b9cc;
  --warning: #f6c23e;
  --danger: #e74a3b;
  --secondary: #858796;
  --dark: #5a5c69;
  --shadow-soft: 0 0.15rem 1.75rem 0 rgba(58, 59, 69, 0.15);
  --radius: 8px;
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-5: 24px;
  --font-body: "Nunito", "Inter", system-ui, -apple-system, sans-serif;
  --font-size-xs: 11px;
  --font-size-sm: 13px;
  --font-size-md: 15px;
  --font-size-lg: 20px;
  --transition: 140ms ease-out;
}

* { box-sizing: border-box; }
html, body {
  padding: 0;
  margin: 0;
  background: var(--bg);
  color: var(--text);
  font-family: var(--font-body);
  font-size: var(--font-size-sm);
  line-height: 1.4;
  min-height: 100%;
}

a { color: var(--accent); text-decoration: none; }

input, select {
  background: var(--bg-elev-1);
  border: 1px solid var(--border-strong);
  color: var(--text);
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius);
  font-size: var(--font-size-sm);
  outline: none;
  transition: border-color var(--transition), box-shadow var(--transition);
}
input:focus, select:focus { border-color: var(--accent); box-shadow: 0 0 0 1px rgba(78, 115, 223, 0.35); }

.app { display: flex; min-height: 100vh; }

.sidebar {
  width: 224px;
  flex: 0 0 auto;
  background: linear-gradient(180deg, var(--sidebar-from) 10%, var(--sidebar-to) 100%);
  color: #fff;
  display: flex;
  flex-direction: column;
  padding: var(--space-3) 0;
  transition: width var(--transition);
}
.sidebar.collapsed { width: 72px; }
.sidebar.collapsed .nav-label { display: none; }
.sidebar-brand { display: flex; align-items: center; gap: var(--space-2); padding: var(--space-3) var(--space-4); color: #fff; font-weight: 800; text-transform: uppercase; letter-spacing: 0.05em; }
.sidebar-divider { border: 0; border-top: 1px solid rgba(255, 255, 255, 0.15); margin: var(--space-2) var(--space-4); }
.nav-list { list-style: none; margin: 0; padding: 0; }
.nav-link { display: flex; align-items: center; gap: var(--space-3); padding: var(--space-3) var(--space-4); color: rgba(255, 255, 255, 0.8); }
.nav-link:hover { color: #fff; }
.nav-item.active .nav-link { color: #fff; font-weight: 700; background: rgba(255, 255, 255, 0.1); }

.content-wrapper { flex: 1 1 auto; display: flex; flex-direction: column; min-width: 0; }
.topbar { display: flex; align-items: center; gap: var(--space-4); height: 64px; padding: 0 var(--space-5); background: var(--bg-elev-1); box-shadow: var(--shadow-soft); }
.topbar-title { font-size: var(--font-size-lg); font-weight: 400; color: var(--text-dim); margin: 0; flex: 1 1 auto; }
.topbar-user { display: flex; align-items: center; gap: var(--space-3); color: var(--text-muted); }
.btn-icon { border: 0; background: transparent; color: var(--accent); font-size: var(--font-size-md); cursor: pointer; }
.btn-link { border: 0; background: transparent; color: var(--accent); cursor: pointer; }
.btn { border: 0; border-radius: var(--radius); padding: var(--space-2) var(--space-4); cursor: pointer; }
.btn-primary { background: var(--primary); color: #fff; }

.content { flex: 1 1 auto; padding: var(--space-5); }
.footer { padding: var(--space-4); text-align: center; color: var(--text-muted); background: var(--bg-elev-1); }

.page { display: flex; flex-direction: column; gap: var(--space-4); }
.section-title { font-size: var(--font-size-md); color: var(--text-dim); margin: 0; }
.caption { color: var(--text-muted); margin: 0; }
.filter-bar { display: flex; align-items: center; gap: var(--space-3); }
.input-label { font-size: var(--font-size-xs); color: var(--text-muted); text-transform: uppercase; letter-spacing: 0.04em; }

.card { background: var(--bg-elev-1); border: 1px solid var(--border); border-radius: var(--radius); box-shadow: var(--shadow-soft); }
.card-header { padding: var(--space-3) var(--space-4); border-bottom: 1px solid var(--border); font-weight: 700; color: var(--primary); }
.card-body { padding: var(--space-4); display: flex; flex-direction: column; gap: var(--space-2); }

.kpi-row { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: var(--space-4); }
.kpi-card { padding: var(--space-4); border-left: 4px solid var(--secondary); }
.kpi-title { font-size: var(--font-size-xs); font-weight: 700; text-transform: uppercase; color: var(--text-muted); }
.kpi-value { font-size: var(--font-size-lg); font-weight: 700; color: var(--text-dim); margin-top: var(--space-1); }
.border-left-primary { border-left-color: var(--primary); }
.border-left-success { border-left-color: var(--success); }
.border-left-info { border-left-color: var(--info); }
.border-left-warning { border-left-color: var(--warning); }
.border-left-danger { border-left-color: var(--danger); }
.border-left-secondary { border-left-color: var(--secondary); }
.border-left-dark { border-left-color: var(--dark); }

.chart-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: var(--space-4); }
.chart-card.wide { grid-column: 1 / -1; }
.chart-status { min-height: 200px; display: flex; align-items: center; justify-content: center; color: var(--text-muted); }
.chart-area { width: 100%; }
.chart-svg { display: block; }
.chart-gridline { stroke: var(--border); }
.chart-axis { stroke: var(--border-strong); }
.chart-tick, .chart-category, .chart-slice-label { font-size: 11px; fill: var(--text-muted); }
.chart-legend { list-style: none; display: flex; flex-wrap: wrap; gap: var(--space-3); margin: 0; padding: 0; font-size: var(--font-size-xs); color: var(--text-dim); }
.chart-legend li { display: flex; align-items: center; gap: var(--space-1); }
.swatch { width: 10px; height: 10px; border-radius: 2px; display: inline-block; }

.alert { display: flex; align-items: center; gap: var(--space-2); padding: var(--space-3) var(--space-4); border-radius: var(--radius); border: 1px solid transparent; }
.alert-danger { background: #f8d7da; color: #842029; border-color: #f5c2c7; }
.alert-warning { background: #fff3cd; color: #664d03; border-color: #ffecb5; }
.alert-info { background: #cff4fc; color: #055160; border-color: #b6effb; }

.login-page { align-items: center; }
.login-card { width: 100%; max-width: 380px; }
"#;
