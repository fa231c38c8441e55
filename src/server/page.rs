/// Dashboard page. Draws the controls from `/api/layout`, opens a session and
/// forwards each control change as an event; only returned figures are redrawn.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Launch Records Dashboard</title>
  <script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
  <style>
    body { font-family: sans-serif; margin: 2rem; }
    h1 { text-align: center; }
    .slider { display: flex; gap: 1rem; align-items: center; }
    .marks { display: flex; justify-content: space-between; font-size: 0.8rem; color: #666; }
  </style>
</head>
<body>
  <h1 id="heading"></h1>
  <input id="site-filter" placeholder="" list="site-list">
  <select id="site-dropdown"></select>
  <datalist id="site-list"></datalist>
  <br>
  <div id="success-pie-chart"></div>
  <br>
  <p id="slider-caption"></p>
  <div class="slider">
    <input id="payload-low" type="range">
    <input id="payload-high" type="range">
    <span id="payload-value"></span>
  </div>
  <div class="marks" id="payload-marks"></div>
  <div id="success-payload-scatter-chart"></div>

<script>
let sessionId = null;
let layout = null;

function draw(figures) {
  if (figures.proportion) {
    Plotly.react(layout.proportionGraphId, figures.proportion.data, figures.proportion.layout);
  }
  if (figures.correlation) {
    Plotly.react(layout.correlationGraphId, figures.correlation.data, figures.correlation.layout);
  }
}

async function send(body) {
  const resp = await fetch(`/api/sessions/${sessionId}/events`, {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: JSON.stringify(body),
  });
  if (resp.ok) {
    draw(await resp.json());
  } else {
    console.error((await resp.json()).error);
  }
}

function currentRange() {
  const lo = Number(document.getElementById("payload-low").value);
  const hi = Number(document.getElementById("payload-high").value);
  return [Math.min(lo, hi), Math.max(lo, hi)];
}

async function init() {
  layout = await (await fetch("/api/layout")).json();
  document.getElementById("heading").textContent = layout.heading;
  document.getElementById("slider-caption").textContent = layout.sliderCaption;

  const dd = layout.siteDropdown;
  const select = document.getElementById("site-dropdown");
  const list = document.getElementById("site-list");
  const filter = document.getElementById("site-filter");
  filter.placeholder = dd.placeholder;
  filter.hidden = !dd.searchable;
  for (const opt of dd.options) {
    select.add(new Option(opt.label, opt.value, opt.value === dd.value, opt.value === dd.value));
    const item = document.createElement("option");
    item.value = opt.value;
    list.appendChild(item);
  }

  const s = layout.payloadSlider;
  for (const id of ["payload-low", "payload-high"]) {
    const el = document.getElementById(id);
    el.min = s.min; el.max = s.max; el.step = s.step;
  }
  document.getElementById("payload-low").value = s.value[0];
  document.getElementById("payload-high").value = s.value[1];
  document.getElementById("payload-value").textContent = `${s.value[0]} - ${s.value[1]}`;
  const marks = document.getElementById("payload-marks");
  Object.keys(s.marks).map(Number).sort((a, b) => a - b)
    .forEach(k => { const m = document.createElement("span"); m.textContent = s.marks[String(k)]; marks.appendChild(m); });

  const opened = await (await fetch("/api/sessions", { method: "POST" })).json();
  sessionId = opened.session_id;
  draw(opened);

  select.addEventListener("change", () => send({ site: select.value }));
  filter.addEventListener("change", () => {
    if (dd.options.some(o => o.value === filter.value)) {
      select.value = filter.value;
      send({ site: filter.value });
    }
  });
  for (const id of ["payload-low", "payload-high"]) {
    document.getElementById(id).addEventListener("change", () => {
      const range = currentRange();
      document.getElementById("payload-value").textContent = `${range[0]} - ${range[1]}`;
      send({ payload_range: range });
    });
  }
  window.addEventListener("beforeunload", () => {
    fetch(`/api/sessions/${sessionId}`, { method: "DELETE", keepalive: true });
  });
}

init();
</script>
</body>
</html>
"#;
