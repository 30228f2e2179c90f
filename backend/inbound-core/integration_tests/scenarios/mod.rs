mod panel_nodes;
