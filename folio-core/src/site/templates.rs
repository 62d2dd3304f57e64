//! Handlebars sources for the generated page.

/// Page shell. Pulls in the `style`, `timeline` and `playback_script` partials.
pub const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="{{page.lang}}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{page.title}}</title>
<link rel="icon" href="data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>{{page.icon}}</text></svg>">
<style>
{{> style}}
</style>
</head>
<body>
<main class="page">

<header class="header">
  <div class="header-main">
    <div class="h1">{{profile.name}}</div>
    {{#if profile.tagline}}<div class="tagline">{{profile.tagline}}</div>{{/if}}
    {{#if profile.summary}}<div class="muted summary">{{profile.summary}}</div>{{/if}}
    <div class="divider"></div>
    <div class="social">
      {{#each socials}}<a href="{{url}}" target="_blank" rel="noopener"><span class="btn">{{#if icon}}{{icon}} {{/if}}{{label}}</span></a>{{/each}}
    </div>
  </div>
  <div class="header-side card">
    {{#if image.found}}
    <figure class="profile"><img src="{{image.src}}" alt="{{image.caption}}"><figcaption class="muted">{{image.caption}}</figcaption></figure>
    {{else}}
    <figure class="profile placeholder"><div class="avatar" aria-hidden="true">{{image.initials}}</div><figcaption class="muted">{{image.caption}}</figcaption></figure>
    {{/if}}
  </div>
</header>

{{> timeline}}

<div class="columns">
  <div class="col-left">
    {{#if about}}
    <section class="card">
      <div class="h2">About</div>
      {{#each about}}<p>{{this}}</p>{{/each}}
    </section>
    {{/if}}

    {{#if skills}}
    <section class="card">
      <div class="h2">Skills</div>
      {{#each skills}}<span class="chip">{{this}}</span>{{/each}}
    </section>
    {{/if}}

    {{#if projects}}
    <section class="card">
      <div class="h2">Projects</div>
      {{#each projects}}
      <article class="project">
        <div class="project-title">{{title}}</div>
        <div class="muted project-desc">{{description}}</div>
        {{#each tags}}<span class="pill">{{this}}</span>{{/each}}
        {{#if link}}<div class="project-link"><a href="{{link}}" target="_blank" rel="noopener">🔎 View</a></div>{{/if}}
        <div class="divider"></div>
      </article>
      {{/each}}
    </section>
    {{/if}}
  </div>

  <aside class="col-right">
    <section class="card profile-fixed">
      <div class="h2">Contact</div>
      <ul class="contact">
        {{#if contact.location}}<li>📍 {{contact.location}}</li>{{/if}}
        {{#if contact.email}}<li>✉️ <a href="mailto:{{contact.email}}">{{contact.email}}</a></li>{{/if}}
        {{#each contact.links}}<li>🔗 <a href="{{this}}" target="_blank" rel="noopener">{{this}}</a></li>{{/each}}
      </ul>
      {{#if resume.available}}
      <a class="resume-btn" href="{{resume.href}}" download="{{resume.file_name}}">{{resume.label}}</a>
      {{else}}
      <div class="alert" role="alert">{{resume.message}}</div>
      {{/if}}
    </section>

    {{#if highlights}}
    <section class="card">
      <div class="h2">Highlights</div>
      <ul>{{#each highlights}}<li>{{this}}</li>{{/each}}</ul>
    </section>
    {{/if}}
  </aside>
</div>

<footer class="footer">© {{#if footer.year}}{{footer.year}} {{/if}}{{footer.owner}}{{#if footer.credit}} • {{footer.credit}}{{/if}}</footer>
</main>
<script>
{{> playback_script}}
</script>
</body>
</html>
"#;

/// Timeline card: static chart, hidden frames and the play button.
pub const TIMELINE_PARTIAL: &str = r#"<section class="card timeline" id="folio-timeline" data-frame-ms="{{timeline.frame_ms}}" data-from-current="{{timeline.from_current}}" data-frame-count="{{timeline.frame_count}}">
  <div class="chart">
    <div class="still">{{{timeline.static_svg}}}</div>
    {{#each timeline.frames}}<div class="frame" data-frame="{{@index}}" hidden>{{{this}}}</div>
    {{/each}}
  </div>
  <div class="controls">
    <button type="button" class="play"{{#unless timeline.has_frames}} disabled{{/unless}}>{{timeline.button_label}}</button>
  </div>
</section>
"#;

/// Client-side playback loop: one frame per `data-frame-ms`, last frame held.
pub const PLAYBACK_SCRIPT: &str = r#"(function () {
  var root = document.getElementById('folio-timeline');
  if (!root) { return; }
  var button = root.querySelector('.play');
  var still = root.querySelector('.still');
  var frames = Array.prototype.slice.call(root.querySelectorAll('.frame'));
  if (!button || frames.length === 0) { return; }
  var interval = parseInt(root.getAttribute('data-frame-ms'), 10) || 800;
  var fromCurrent = root.getAttribute('data-from-current') === 'true';
  var next = 0;
  var timer = null;

  function show(i) {
    still.hidden = true;
    frames.forEach(function (f, j) { f.hidden = j !== i; });
  }

  function step() {
    show(next);
    next += 1;
    if (next >= frames.length) {
      clearInterval(timer);
      timer = null;
    }
  }

  button.addEventListener('click', function () {
    if (timer !== null) { return; }
    if (next >= frames.length || !fromCurrent) { next = 0; }
    step();
    if (next < frames.length) { timer = setInterval(step, interval); }
  });
})();
"#;

/// Stylesheet; theme colors arrive as `theme.*` values.
pub const STYLE_TEMPLATE: &str = r#"@import url('https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap');

:root {
  --primary: {{theme.primary}};
  --accent: {{theme.accent}};
  --bg: {{theme.bg}};
  --text: {{theme.text}};
  --muted: {{theme.muted}};
  --card: {{theme.card}};
  --border: {{theme.border}};
}

* { box-sizing: border-box; }

body {
  margin: 0;
  background: linear-gradient(180deg, var(--bg) 0%, #0A0F1C 100%);
  color: var(--text);
  font-family: 'Inter', sans-serif;
  min-height: 100vh;
}

a { color: var(--accent); }

.page { max-width: 1400px; margin: 0 auto; padding: 24px 10px; }

@keyframes fadeUp { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: translateY(0); } }
@keyframes shimmer { 0% { background-position: -200% center; } 100% { background-position: 200% center; } }

.card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: 16px;
  padding: 16px 18px;
  margin-bottom: 14px;
  box-shadow: 0 6px 20px rgba(0,0,0,0.35);
  animation: fadeUp 0.6s ease-out;
  transition: transform .3s ease, box-shadow .3s ease;
  width: 100%;
}
.card:hover { transform: translateY(-3px); box-shadow: 0 10px 24px rgba(0,0,0,0.45); }

.chip {
  display: inline-block;
  padding: 5px 10px;
  border-radius: 999px;
  background: rgba(79,70,229,0.12);
  border: 1px solid rgba(79,70,229,0.35);
  color: var(--text);
  font-size: 12px;
  margin: 4px 6px 0 0;
  transition: all .2s ease;
}
.chip:hover { background: rgba(79,70,229,0.25); transform: scale(1.05); }

.pill {
  display: inline-block;
  padding: 5px 8px;
  border-radius: 999px;
  font-size: 11px;
  color: var(--text);
  background: rgba(255,255,255,0.04);
  border: 1px solid var(--border);
  margin: 0 5px 5px 0;
  transition: all .2s ease;
}
.pill:hover { background: rgba(20,184,166,0.15); border-color: var(--accent); }

.h1 { font-size: 28px; font-weight: 700; margin: 0 0 6px 0; }
.h2 { font-size: 20px; font-weight: 600; margin: 0 0 12px 0; }
.muted { color: var(--muted); }
.summary { margin-top: 8px; }
.divider { height: 1px; background: var(--border); width: 100%; margin: 8px 0 12px 0; }

.tagline {
  background: linear-gradient(90deg, var(--primary), var(--accent), var(--primary));
  background-size: 200%;
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
  font-weight: 600;
  letter-spacing: 0.02em;
  animation: shimmer 5s infinite linear;
}

.social a { text-decoration: none; margin-right: 8px; }
.social .btn {
  display: inline-flex; align-items: center; gap: 6px;
  background: rgba(31,41,55,0.6);
  border: 1px solid var(--border);
  color: var(--text);
  padding: 6px 10px; border-radius: 8px; font-size: 12px;
  transition: all .25s ease;
}
.social .btn:hover { border-color: var(--accent); box-shadow: 0 0 10px rgba(20,184,166,0.25); transform: scale(1.05); }

.header { display: grid; grid-template-columns: 65fr 35fr; gap: 32px; margin-bottom: 34px; }
.profile { margin: 0; text-align: center; }
.profile img { width: 100%; border-radius: 12px; }
.profile .avatar {
  width: 160px; height: 160px; margin: 12px auto; border-radius: 50%;
  display: flex; align-items: center; justify-content: center;
  background: var(--border); color: var(--muted); font-size: 48px; font-weight: 600;
}

.timeline .chart { width: 100%; overflow-x: auto; }
.timeline svg { width: 100%; height: auto; display: block; }
.timeline .controls { text-align: center; margin-top: 8px; }
.timeline .play {
  background: rgba(31,41,55,0.6); color: var(--text);
  border: 1px solid var(--border); border-radius: 8px; padding: 8px 18px; cursor: pointer;
}
.timeline .play:hover:not([disabled]) { border-color: var(--accent); }
.timeline .play[disabled] { opacity: 0.5; cursor: default; }

.columns { display: grid; grid-template-columns: 62fr 38fr; gap: 32px; }
.project { margin-bottom: 14px; }
.project-title { font-weight: 600; }
.project-desc { margin: 6px 0 8px 0; }
.project-link { margin-top: 8px; }
.contact { padding-left: 18px; }

.resume-btn {
  display: inline-block; color: #ffffff; background-color: #6B7280;
  border-radius: 8px; padding: 8px 18px; font-weight: 500; text-decoration: none;
  transition: background-color 0.3s ease;
}
.resume-btn:hover { background-color: #1F2937; }
.alert {
  background: rgba(239,68,68,0.12); border: 1px solid rgba(239,68,68,0.45);
  color: #FCA5A5; border-radius: 8px; padding: 10px 12px; font-size: 14px;
}

.footer { text-align: center; color: #9CA3AF; font-size: 13px; margin-top: 24px; }

@media (min-width: 1200px) { .profile-fixed { position: sticky; top: 24px; } }

@media (max-width: 1200px) {
  .h1 { font-size: 24px; }
  .h2 { font-size: 18px; }
}

@media (max-width: 768px) {
  .h1 { font-size: 20px; }
  .h2 { font-size: 16px; }
  .chip { font-size: 10px; padding: 4px 8px; }
  .pill { font-size: 10px; padding: 4px 6px; }
  .social .btn { padding: 4px 8px; font-size: 11px; gap: 4px; }
  .header, .columns { grid-template-columns: 1fr; }
}
"#;
