pub mod core;
pub mod payload;
pub mod span;
pub mod query;
pub mod posting;
pub mod engine;
pub mod schema;

/*
┌────────────────────────────────────────────────────────────────────────────────────────────┐
│                          ANNOMATCH STRUCT ARCHITECTURE                                       │
└────────────────────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────────────── DATA MODEL ──────────────────────────────────────────┐
│                                                                                              │
│  ┌──────────────────┐  ┌───────────────────────┐  ┌───────────────────────────────────┐   │
│  │ struct DocId     │  │ struct ElementSpan    │  │ struct QueryElement                │   │
│  │ • 0: u32         │  │ • id: u64             │  │ • token: String                    │   │
│  │ NO_MORE_DOCS     │  │ • parent_id: u64      │  │ • element_type: ElementType        │   │
│  └──────────────────┘  │ • start_offset: u32   │  │ • label: Option<String>            │   │
│                        │ • end_offset: u32     │  │ • connect_qty: usize               │   │
│                        └───────────────────────┘  │ • component_id: usize              │   │
│                                                    └───────────────────────────────────┘   │
│  ┌──────────────────────┐  ┌────────────────────────────────────────────────────────┐     │
│  │ struct ConstraintEdge│  │ struct CompiledQuery                                   │     │
│  │ • head: usize        │  │ • elements: Vec<QueryElement>                          │     │
│  │ • dependent: usize    │  │ • edges: Vec<ConstraintEdge>                           │     │
│  │ • kind: ConstraintKind│  └────────────────────────────────────────────────────────┘     │
│  └──────────────────────┘                                                                   │
└──────────────────────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────────────── ENGINE LAYER ─────────────────────────────────────────┐
│                                                                                              │
│  ┌────────────────────────────────────────────────────────────────────────────────────┐    │
│  │                           struct OrderedQuery                                       │    │
│  │  ┌──────────────────────────────────────────────────────────────────────────────┐ │    │
│  │  │ compiled: Arc<CompiledQuery>                                                 │ │    │
│  │  │ sort_of: Vec<usize>             // original index -> sort_index             │ │    │
│  │  │ order: Vec<usize>               // sort_index -> original index             │ │    │
│  │  │ constraint_index: Vec<Vec<ConstraintCheck>> // per sort_index node          │ │    │
│  │  └──────────────────────────────────────────────────────────────────────────────┘ │    │
│  └────────────────────────────────────────────────────────────────────────────────────┘    │
│                                                                                              │
│  ┌─────────────────────┐  ┌──────────────────────┐  ┌────────────────────────────┐        │
│  │ struct PostingState │  │ struct Intersection   │  │ struct ConstraintMatcher   │        │
│  │ • enumerator: E      │  │ Driver                │  │ • match(i) recursion       │        │
│  │ • doc_id            │  │ • states: Vec<PState> │  └────────────────────────────┘        │
│  │ • element_buffer    │  │ • advance_to_common() │                                         │
│  │ • curr_elem_index   │  └──────────────────────┘  ┌────────────────────────────┐        │
│  └─────────────────────┘                            │ struct MatchSink (trait)   │        │
│                                                      │ • on_match()               │        │
│                                                      └────────────────────────────┘        │
└──────────────────────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────────────── AMBIENT LAYER ────────────────────────────────────────┐
│                                                                                              │
│  ┌──────────────────────┐  ┌──────────────────────┐  ┌───────────────────────────┐         │
│  │ struct EngineConfig   │  │ struct Error         │  │ struct IndexStats         │         │
│  │ • max_payload_len    │  │ • kind: ErrorKind     │  │ • post_cost: RwLock<Map>  │         │
│  │ • default_lin_iter   │  │ • context: String     │  └───────────────────────────┘         │
│  └──────────────────────┘  └──────────────────────┘                                         │
│                                                                                              │
│  ┌──────────────────────────────────────────────────────────────────────────────────┐       │
│  │ mod schema::validate — checks the host's field attributes at startup             │       │
│  └──────────────────────────────────────────────────────────────────────────────────┘       │
└──────────────────────────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────────────── RELATIONSHIPS ────────────────────────────────────────┐
│                                                                                              │
│  query::parser ──produces──> CompiledQuery ──ordered_by(post_cost)──> OrderedQuery          │
│                                                                                              │
│  host ──opens──> PostingEnumerator (per element) ──wrapped_by──> PostingState                │
│                                                                                              │
│  IntersectionDriver ──gallops──> common DocId ──feeds──> ConstraintMatcher::run              │
│                                                                                              │
│  ConstraintMatcher ──emits──> MatchSink (DocIdCollector / TupleCollector / channel sink)     │
│                                                                                              │
└──────────────────────────────────────────────────────────────────────────────────────────────┘
*/
